use thiserror::Error;

#[derive(Debug, Error)]
pub enum LogError {
    #[error("Failed to open log file '{path}': {source}")]
    OpenFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
