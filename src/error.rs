use thiserror::Error;

/// Error type shared by every Series/DataFrame operation
#[derive(Error, Debug)]
pub enum Error {
    /// Operand lengths or shapes cannot be aligned
    #[error("shape mismatch: expected {expected}, found {found}")]
    ShapeMismatch { expected: String, found: String },

    /// The target column or Series does not have the dtype the operation needs
    #[error("type mismatch: {0}")]
    TypeMismatch(String),

    /// A label lookup referenced a label absent from the Index
    #[error("label not found: {0}")]
    LabelNotFound(String),

    #[error("invalid configuration: {0}")]
    ConfigError(String),

    #[error("index out of bounds: index {index}, size {size}")]
    IndexOutOfBounds { index: usize, size: usize },

    #[error("invalid value: {0}")]
    InvalidValue(String),

    #[error("CSV error")]
    Csv(#[source] csv::Error),

    #[error("JSON error")]
    Json(#[source] serde_json::Error),

    #[error("TOML error")]
    Toml(#[source] toml::de::Error),

    #[error("I/O error")]
    Io(#[source] std::io::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Shorthand for a length mismatch between two extents
    pub(crate) fn shape(expected: usize, found: usize) -> Self {
        Error::ShapeMismatch {
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }

    /// Shorthand for a `(rows, columns)` mismatch
    pub(crate) fn shape2(expected: (usize, usize), found: (usize, usize)) -> Self {
        Error::ShapeMismatch {
            expected: format!("{}x{}", expected.0, expected.1),
            found: format!("{}x{}", found.0, found.1),
        }
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Error::Csv(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Toml(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<regex::Error> for Error {
    fn from(err: regex::Error) -> Self {
        Error::InvalidValue(format!("invalid regex: {}", err))
    }
}
