/// Blocking alert, closed only by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WarningModalState {
    pub title: String,
    pub message: String,
}

impl WarningModalState {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }
}
