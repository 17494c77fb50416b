use thiserror::Error;

pub type Result<T> = std::result::Result<T, HueError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HueError {
    /// The string matches none of the five known color syntaxes.
    #[error("unrecognized color format: {0:?}")]
    UnrecognizedFormat(String),

    /// The prefix matched but the fields could not be read.
    #[error("malformed color string {color:?}: {reason}")]
    MalformedColorString { color: String, reason: String },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl HueError {
    pub(crate) fn malformed(color: &str, reason: impl Into<String>) -> Self {
        HueError::MalformedColorString {
            color: color.to_string(),
            reason: reason.into(),
        }
    }
}
