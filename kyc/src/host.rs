//! Ambient state of the hosting window, injected instead of read from
//! globals: the user agent string, the viewport width and the location
//! fragment.

use crate::events::{EventSource, Listener};

#[derive(Debug, Default)]
pub struct Viewport {
    width: Option<f32>,
    resized: EventSource<f32>,
}

impl Viewport {
    /// Width in logical pixels, `None` until the window reported its size.
    pub fn width(&self) -> Option<f32> {
        self.width
    }

    pub fn resize(&mut self, width: f32) {
        self.width = Some(width);
        self.resized.emit(width);
    }

    pub fn on_resize(&mut self) -> Listener<f32> {
        self.resized.subscribe()
    }

    pub fn listener_count(&self) -> usize {
        self.resized.listener_count()
    }
}

#[derive(Debug, Default)]
pub struct Location {
    fragment: String,
    changed: EventSource<String>,
}

impl Location {
    pub fn new(fragment: impl Into<String>) -> Self {
        Self {
            fragment: fragment.into(),
            changed: EventSource::new(),
        }
    }

    pub fn fragment(&self) -> &str {
        &self.fragment
    }

    /// Replaces the fragment and notifies listeners, even when the value is
    /// unchanged.
    pub fn set_fragment(&mut self, fragment: impl Into<String>) {
        self.fragment = fragment.into();
        tracing::debug!("fragment changed to {:?}", self.fragment);
        self.changed.emit(self.fragment.clone());
    }

    pub fn on_fragment_change(&mut self) -> Listener<String> {
        self.changed.subscribe()
    }

    pub fn listener_count(&self) -> usize {
        self.changed.listener_count()
    }
}

#[derive(Debug)]
pub struct Host {
    pub user_agent: String,
    pub viewport: Viewport,
    pub location: Location,
}

impl Host {
    pub fn new(user_agent: impl Into<String>, fragment: impl Into<String>) -> Self {
        Self {
            user_agent: user_agent.into(),
            viewport: Viewport::default(),
            location: Location::new(fragment),
        }
    }

    pub fn with_width(mut self, width: f32) -> Self {
        self.viewport.width = Some(width);
        self
    }
}
