use std::ffi::OsString;
use std::path::PathBuf;

use crate::logging::Severity;
use crate::preprocess::args::PreprocessArgs;
use crate::simulate::args::SimulateArgs;
use crate::visualize::args::VisualizeArgs;
use clap::{ArgGroup, Parser, Subcommand};

/// Single-dash multi-letter spellings accepted for compatibility, with the
/// long option each one stands for.
const LEGACY_FLAGS: [(&str, &str); 6] = [
    ("-tm", "--time_max"),
    ("-ts", "--time_step"),
    ("-tp", "--time_pulse"),
    ("-lvw", "--lenVwidth"),
    ("-lvt", "--lenVtime"),
    ("-lvh", "--lenVheight"),
];

// Top-level CLI parser. Each analysis mode brings its own Args struct.
#[derive(Parser, Debug)]
#[command(
    name = "ThermalAnalyzer",
    version,
    about = "Thermal simulation and analysis for rapid thermal annealing (RTA).",
    subcommand_required = true
)]
#[command(group(ArgGroup::new("severity").args(["verbose", "quiet", "debug"])))]
pub struct Args {
    #[arg(short, long, help = "Enable verbose mode with detailed information")]
    pub verbose: bool,

    #[arg(
        short,
        long,
        help = "Suppress informational messages and only display warnings and errors"
    )]
    pub quiet: bool,

    #[arg(
        short,
        long,
        help = "Display additional debug messages (can significantly increase output)"
    )]
    pub debug: bool,

    #[arg(
        short = 'l',
        long = "log_file",
        value_name = "FILE",
        help = "Log file for the run"
    )]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub mode: Mode,
}

#[derive(Subcommand, Debug)]
pub enum Mode {
    /// Preprocess a GDSII/JSON layout into a dataset used by the other modes
    #[command(name = "preprocessGDS")]
    Preprocess(PreprocessArgs),

    /// Run a thermal simulation on a dataset or a predefined test case
    #[command(name = "simulate")]
    Simulate(SimulateArgs),

    /// Plot emissivity and temperature results
    #[command(name = "visualize")]
    Visualize(VisualizeArgs),
}

impl Mode {
    /// Subcommand name as typed on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Mode::Preprocess(_) => "preprocessGDS",
            Mode::Simulate(_) => "simulate",
            Mode::Visualize(_) => "visualize",
        }
    }
}

impl Args {
    /// Severity picked by `-v`/`-q`/`-d`; `None` when no flag was given.
    pub fn requested_severity(&self) -> Option<Severity> {
        if self.verbose {
            Some(Severity::Info)
        } else if self.quiet {
            Some(Severity::Warning)
        } else if self.debug {
            Some(Severity::Debug)
        } else {
            None
        }
    }

    /// Parse an argument vector after rewriting legacy single-dash options.
    pub fn try_parse_legacy<I, T>(argv: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::try_parse_from(normalize_legacy_flags(argv))
    }
}

/// Rewrite `-tm 5` / `-tm=5` style tokens to their long spelling. Anything
/// after a bare `--` is left untouched.
pub fn normalize_legacy_flags<I, T>(argv: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut passthrough = false;
    argv.into_iter()
        .map(Into::into)
        .map(|token| {
            if passthrough {
                return token;
            }
            let Some(text) = token.to_str() else {
                return token;
            };
            if text == "--" {
                passthrough = true;
                return token;
            }
            let (flag, value) = match text.split_once('=') {
                Some((flag, value)) => (flag, Some(value)),
                None => (text, None),
            };
            match LEGACY_FLAGS.iter().find(|(legacy, _)| *legacy == flag) {
                Some((_, long)) => match value {
                    Some(value) => OsString::from(format!("{long}={value}")),
                    None => OsString::from(*long),
                },
                None => token,
            }
        })
        .collect()
}
