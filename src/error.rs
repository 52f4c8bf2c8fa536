use thiserror::Error;

use crate::logging::Severity;
use crate::logging::errors::LogError;
use crate::toolkit::errors::ToolkitError;

#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// Incomplete or contradictory command line; reported with usage text.
    #[error("{message}")]
    Usage {
        subcommand: &'static str,
        message: String,
    },

    /// Well-formed input that refers to something unusable.
    #[error("{0}")]
    Validation(String),

    #[error("{0} is not yet implemented.")]
    NotImplemented(String),

    /// A state the command grammar should have excluded.
    #[error("Internal inconsistency: {0}.")]
    Internal(String),

    #[error(transparent)]
    Log(#[from] LogError),

    #[error(transparent)]
    Toolkit(#[from] ToolkitError),

    #[error("While running '{mode}': {source}")]
    InMode {
        mode: &'static str,
        #[source]
        source: Box<AnalyzerError>,
    },
}

impl AnalyzerError {
    /// Wrap a collaborator failure. An unbuilt collaborator feature stays
    /// recognisable as `NotImplemented`.
    pub fn from_toolkit(mode: &'static str, err: ToolkitError) -> Self {
        match err {
            ToolkitError::NotImplemented(what) => AnalyzerError::NotImplemented(what),
            other => AnalyzerError::InMode {
                mode,
                source: Box::new(AnalyzerError::Toolkit(other)),
            },
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            AnalyzerError::NotImplemented(_) | AnalyzerError::Internal(_) => Severity::Critical,
            AnalyzerError::InMode { source, .. } => source.severity(),
            _ => Severity::Error,
        }
    }

    /// Process status for this outcome. Validation problems are reported but
    /// do not fail the run.
    pub fn exit_code(&self) -> u8 {
        match self {
            AnalyzerError::Usage { .. } => 2,
            AnalyzerError::Validation(_) => 0,
            AnalyzerError::InMode { source, .. } => source.exit_code(),
            _ => 1,
        }
    }
}
