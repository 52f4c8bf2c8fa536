use std::fmt;

/// Ordered logging levels, most verbose first.
///
/// `Status` is the level used for normal progress messages. It sits between
/// `Info` and `Warning` so that a default run shows progress without the
/// detail `--verbose` adds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Debug,
    Info,
    Status,
    Warning,
    Error,
    Critical,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Status => "STATUS",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
            Self::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Minimum level for the console sink.
pub fn console_threshold(requested: Option<Severity>) -> Severity {
    requested.unwrap_or(Severity::Status)
}

/// Minimum level for the file sink. Without an explicit verbosity flag the
/// file keeps Info messages even though the console hides them.
pub fn file_threshold(requested: Option<Severity>) -> Severity {
    requested.unwrap_or(Severity::Info)
}
