/// Result alias that carries the custom [`SortVizError`] type.
pub type Result<T> = std::result::Result<T, SortVizError>;

/// Common error type for the core crate.
///
/// The sorting engine itself is total over well-formed arrays and never
/// constructs one of these; the variants cover the surrounding concerns
/// (configuration files, trace output, strategy lookup by name).
#[derive(Debug, thiserror::Error)]
pub enum SortVizError {
    /// Free-form message for conditions that do not warrant their own
    /// variant.
    #[error("{0}")]
    Message(String),
    /// Wrapper around standard IO errors.
    #[error("{0}")]
    Io(#[from] std::io::Error),
    /// Wrapper around JSON serialization errors.
    #[error("{0}")]
    Json(#[from] serde_json::Error),
    /// A strategy name that does not match any registered algorithm.
    #[error("unknown sorting strategy `{0}`")]
    UnknownStrategy(String),
}

impl SortVizError {
    /// Creates a new error that simply wraps the provided message.
    pub fn msg<T: Into<String>>(msg: T) -> Self {
        Self::Message(msg.into())
    }
}

impl From<&str> for SortVizError {
    fn from(value: &str) -> Self {
        Self::msg(value)
    }
}

impl From<String> for SortVizError {
    fn from(value: String) -> Self {
        Self::Message(value)
    }
}
