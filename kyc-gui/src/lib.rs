pub mod args;
pub mod logger;
pub mod state;
pub mod views;

pub use kyc::VERSION;
