use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("invalid SKU: {0:?}")]
    InvalidSku(String),
    #[error("unknown chain style: {0}")]
    UnknownStyle(String),
    #[error("unknown metal: {0}")]
    UnknownMetal(String),
    #[error("unknown finish: {0}")]
    UnknownFinish(String),
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    #[error("invalid value for {field}: {message}")]
    InvalidField {
        field: &'static str,
        message: String,
    },
}

pub type Result<T> = std::result::Result<T, ModelError>;
