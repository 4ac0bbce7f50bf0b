//! Core of the identity verification (KYC) client.
//!
//! Everything the GUI needs to decide what to show lives here, free of any
//! widget dependency: device classification, fragment routing, the
//! submission form, the admin review console and the HTTP client talking to
//! the verification backend.

pub mod api;
pub mod auth;
pub mod config;
pub mod console;
pub mod device;
pub mod events;
pub mod form;
pub mod host;
pub mod models;
pub mod route;
pub mod shell;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
