pub mod args;

use crate::error::AnalyzerError;
use crate::logging::Logger;
use crate::toolkit::Preprocessor;
use args::PreprocessArgs;

const MODE: &str = "preprocessGDS";

pub fn run(
    args: &PreprocessArgs,
    preprocessor: &mut dyn Preprocessor,
    log: &Logger,
) -> Result<(), AnalyzerError> {
    match (&args.json_file, &args.gds_file) {
        (Some(json), _) => {
            log.info(format!("Reading layout from JSON {}", json.display()));
            preprocessor
                .build_from_json(json, &args.out_dir)
                .map_err(|e| AnalyzerError::from_toolkit(MODE, e))
        }
        (None, Some(gds)) => preprocessor
            .build_from_layout(gds, &args.out_dir)
            .map_err(|e| AnalyzerError::from_toolkit(MODE, e)),
        (None, None) => Err(AnalyzerError::Internal(
            "preprocessGDS reached without --json or --gds".to_string(),
        )),
    }
}
