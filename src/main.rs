use std::process::ExitCode;
use std::rc::Rc;

use thermal_analyzer::args::Args;
use thermal_analyzer::commands;
use thermal_analyzer::logging::{LOGGER_NAME, Logger};
use thermal_analyzer::toolkit::Toolkit;

fn main() -> ExitCode {
    let args = match Args::try_parse_legacy(std::env::args_os()) {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            return ExitCode::from(err.exit_code() as u8);
        }
    };

    let log = match Logger::new(args.requested_severity(), args.log_file.as_deref()) {
        Ok(log) => Rc::new(log),
        Err(err) => {
            eprintln!("[{LOGGER_NAME}][CRITICAL] {err}");
            return ExitCode::FAILURE;
        }
    };

    let mut toolkit = Toolkit::reference(Rc::clone(&log));
    let result = commands::dispatch(&args, &mut toolkit, &log);
    commands::finish(result, &log)
}
