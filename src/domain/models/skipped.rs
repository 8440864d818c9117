/// An input item that was dropped instead of failing the whole request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedItem {
    pub filename: Option<String>,
    pub reason: String,
}

impl SkippedItem {
    pub fn new(filename: Option<String>, reason: impl Into<String>) -> Self {
        Self {
            filename,
            reason: reason.into(),
        }
    }
}
