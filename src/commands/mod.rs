use std::process::ExitCode;

use clap::CommandFactory;
use clap::error::ErrorKind;

use crate::args::{Args, Mode};
use crate::error::AnalyzerError;
use crate::logging::Logger;
use crate::preprocess;
use crate::simulate;
use crate::toolkit::Toolkit;
use crate::visualize;

/// Route the parsed command line to its one mode handler.
pub fn dispatch(args: &Args, toolkit: &mut Toolkit, log: &Logger) -> Result<(), AnalyzerError> {
    log.debug(format!("Analysis mode: {}", args.mode.name()));

    match &args.mode {
        Mode::Preprocess(mode_args) => {
            preprocess::run(mode_args, toolkit.preprocessor.as_mut(), log)
        }
        Mode::Simulate(mode_args) => simulate::run(mode_args, toolkit.solver.as_mut(), log),
        Mode::Visualize(mode_args) => visualize::run(mode_args, toolkit.visualizer.as_mut(), log),
    }
}

/// Report the outcome of a run and choose the process status.
pub fn finish(result: Result<(), AnalyzerError>, log: &Logger) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(AnalyzerError::Usage {
            subcommand,
            message,
        }) => {
            let err = usage_error(subcommand, &message);
            let _ = err.print();
            ExitCode::from(err.exit_code() as u8)
        }
        Err(err) => {
            log.log(err.severity(), &err);
            ExitCode::from(err.exit_code())
        }
    }
}

/// Usage error rendered against the subcommand that was invoked, so the
/// printed usage line matches what the user typed.
pub fn usage_error(subcommand: &str, message: &str) -> clap::Error {
    let mut cmd = Args::command();
    cmd.build();
    match cmd.find_subcommand_mut(subcommand) {
        Some(sub) => sub.error(ErrorKind::MissingRequiredArgument, message),
        None => cmd.error(ErrorKind::MissingRequiredArgument, message),
    }
}
