use thiserror::Error;

/// Why the dataset could not be loaded. Any of these leaves the catalog empty.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("request failed: {0}")]
    Network(String),

    #[error("HTTP error: {0}")]
    Status(u16),

    #[error("failed to parse dataset: {0}")]
    Parse(String),
}

impl LoadError {
    /// Text shown in the catalog's error state.
    pub fn user_message(&self) -> &'static str {
        "Unable to load listings. Please try again."
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(e: serde_json::Error) -> Self {
        LoadError::Parse(e.to_string())
    }
}
