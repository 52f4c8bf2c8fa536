pub mod errors;
pub mod severity;

use std::cell::RefCell;
use std::fmt::Display;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::rc::Rc;

use chrono::Local;

use errors::LogError;
pub use severity::Severity;

/// Name printed in every log line.
pub const LOGGER_NAME: &str = "TAZ";

const FILE_TIMESTAMP: &str = "%Y-%m-%d %H:%M:%S,%3f";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineFormat {
    Console,
    File,
}

/// One log destination with its own minimum level.
pub struct Sink {
    threshold: Severity,
    format: LineFormat,
    writer: RefCell<Box<dyn Write>>,
}

impl Sink {
    pub fn console(threshold: Severity, writer: Box<dyn Write>) -> Self {
        Self {
            threshold,
            format: LineFormat::Console,
            writer: RefCell::new(writer),
        }
    }

    pub fn file(threshold: Severity, writer: Box<dyn Write>) -> Self {
        Self {
            threshold,
            format: LineFormat::File,
            writer: RefCell::new(writer),
        }
    }

    pub fn threshold(&self) -> Severity {
        self.threshold
    }

    pub fn accepts(&self, severity: Severity) -> bool {
        severity >= self.threshold
    }

    fn emit(&self, name: &str, severity: Severity, message: &str) {
        if !self.accepts(severity) {
            return;
        }
        let line = match self.format {
            LineFormat::Console => format!("[{name}][{severity}] {message}\n"),
            LineFormat::File => format!(
                "[{}][{name}][{severity}][{message}]\n",
                Local::now().format(FILE_TIMESTAMP)
            ),
        };
        // A failing sink must not abort the run.
        let mut writer = self.writer.borrow_mut();
        let _ = writer.write_all(line.as_bytes());
        let _ = writer.flush();
    }
}

/// Process-wide logging context. Built once in `main` and handed to every
/// component that reports progress.
pub struct Logger {
    name: String,
    console: Sink,
    file: Option<Sink>,
}

impl Logger {
    /// Console on stderr, plus an append-only file sink when `log_file` is
    /// given. `requested` is the severity selected by `-v`/`-q`/`-d`.
    pub fn new(requested: Option<Severity>, log_file: Option<&Path>) -> Result<Self, LogError> {
        let console = Sink::console(
            severity::console_threshold(requested),
            Box::new(io::stderr()),
        );
        let file = match log_file {
            Some(path) => Some(Sink::file(
                severity::file_threshold(requested),
                Box::new(open_log_file(path)?),
            )),
            None => None,
        };
        Ok(Self::with_sinks(LOGGER_NAME, console, file))
    }

    pub fn with_sinks(name: impl Into<String>, console: Sink, file: Option<Sink>) -> Self {
        Self {
            name: name.into(),
            console,
            file,
        }
    }

    pub fn file_threshold(&self) -> Option<Severity> {
        self.file.as_ref().map(Sink::threshold)
    }

    /// True when at least one sink would record a message at `severity`.
    pub fn enabled(&self, severity: Severity) -> bool {
        self.console.accepts(severity) || self.file.as_ref().is_some_and(|f| f.accepts(severity))
    }

    pub fn log(&self, severity: Severity, message: impl Display) {
        if !self.enabled(severity) {
            return;
        }
        let message = message.to_string();
        self.console.emit(&self.name, severity, &message);
        if let Some(file) = &self.file {
            file.emit(&self.name, severity, &message);
        }
    }

    pub fn debug(&self, message: impl Display) {
        self.log(Severity::Debug, message);
    }

    pub fn info(&self, message: impl Display) {
        self.log(Severity::Info, message);
    }

    pub fn status(&self, message: impl Display) {
        self.log(Severity::Status, message);
    }

    pub fn warning(&self, message: impl Display) {
        self.log(Severity::Warning, message);
    }

    pub fn error(&self, message: impl Display) {
        self.log(Severity::Error, message);
    }

    pub fn critical(&self, message: impl Display) {
        self.log(Severity::Critical, message);
    }
}

fn open_log_file(path: &Path) -> Result<File, LogError> {
    let open_failed = |source| LogError::OpenFailed {
        path: path.display().to_string(),
        source,
    };
    let absolute = std::path::absolute(path).map_err(open_failed)?;
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(&absolute)
        .map_err(open_failed)
}

/// Cloneable in-memory writer. Every clone appends to the same buffer, so a
/// sink can own one clone while the caller inspects another.
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.borrow()).into_owned()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
