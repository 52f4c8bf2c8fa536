use thiserror::Error;

#[derive(Debug, Error)]
pub enum ToolkitError {
    #[error("File error: {0}.")]
    FileError(String),

    #[error("Failed to parse {0}.")]
    ParseError(String),

    #[error("Invalid parameter: {0}.")]
    InvalidParameter(String),

    #[error("Invalid state: {0}.")]
    InvalidState(String),

    #[error("{0} is not yet implemented.")]
    NotImplemented(String),
}
