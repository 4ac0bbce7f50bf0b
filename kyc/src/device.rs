/// Substrings of a lower-cased user agent that identify a handheld device.
pub const MOBILE_KEYWORDS: [&str; 7] = [
    "mobile",
    "android",
    "iphone",
    "ipad",
    "ipod",
    "blackberry",
    "windows phone",
];

/// Widest viewport, in logical pixels, still treated as a mobile screen.
pub const MOBILE_MAX_WIDTH: f32 = 768.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceKind {
    Mobile,
    Desktop,
}

impl DeviceKind {
    pub fn classify(user_agent: &str, viewport_width: f32) -> Self {
        if is_mobile(user_agent, viewport_width) {
            Self::Mobile
        } else {
            Self::Desktop
        }
    }

    pub fn is_mobile(&self) -> bool {
        matches!(self, Self::Mobile)
    }
}

/// Returns true if either the user agent names a handheld device or the
/// viewport is at most [`MOBILE_MAX_WIDTH`] wide.
pub fn is_mobile(user_agent: &str, viewport_width: f32) -> bool {
    let user_agent = user_agent.to_lowercase();
    MOBILE_KEYWORDS.iter().any(|k| user_agent.contains(k)) || viewport_width <= MOBILE_MAX_WIDTH
}
