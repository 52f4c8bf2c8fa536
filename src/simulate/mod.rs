pub mod args;

use crate::error::AnalyzerError;
use crate::logging::Logger;
use crate::toolkit::Solver;
use args::SimulateArgs;

const MODE: &str = "simulate";

/// Build the model from the dataset or the test case, then run the solver.
pub fn run(
    args: &SimulateArgs,
    solver: &mut dyn Solver,
    log: &Logger,
) -> Result<(), AnalyzerError> {
    log.debug(format!("t_max {:e}", args.time_max));
    log.debug(format!("t_step {:e}", args.time_step));
    log.debug(format!("pw_lamp {:e}", args.pulse_width));

    let out_dir = args.out_dir.as_deref();
    let built = match (&args.dataset, args.test_case) {
        (Some(dataset), _) => solver.build(dataset, args.resolution, out_dir),
        (None, Some(id)) => solver.build_test_case(id, args.resolution, out_dir),
        (None, None) => {
            return Err(AnalyzerError::Internal(
                "simulate reached without a dataset or a test case".to_string(),
            ));
        }
    };
    built.map_err(|e| AnalyzerError::from_toolkit(MODE, e))?;

    solver
        .run(args.time_max, args.time_step, args.pulse_width)
        .map_err(|e| AnalyzerError::from_toolkit(MODE, e))
}
