//! Cross-field checks for `visualize`.
//!
//! Every check runs before the first plotting call. The result is a plan
//! naming exactly the calls that will be made, so a rejected request can
//! never leave a half-produced set of figures behind.

use std::path::PathBuf;

use super::args::VisualizeArgs;
use crate::error::AnalyzerError;

const MODE: &str = "visualize";

#[derive(Debug, Clone, PartialEq)]
pub struct EmissivityRequest {
    pub dataset: PathBuf,
    pub resolution: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LengthPlots {
    pub solution: PathBuf,
    pub out_dir: Option<PathBuf>,
    pub time_point: Option<f64>,
    pub width: bool,
    pub height: bool,
    pub time: bool,
}

#[derive(Debug, Default)]
pub struct VisualizePlan {
    pub emissivity: Option<EmissivityRequest>,
    pub length_plots: Option<LengthPlots>,
    /// Validation failure for artifacts dropped from the plan. Reported after
    /// the remaining artifacts are produced.
    pub rejected: Option<AnalyzerError>,
}

impl VisualizePlan {
    pub fn has_artifacts(&self) -> bool {
        self.emissivity.is_some() || self.length_plots.is_some()
    }
}

/// Usage errors abort the whole invocation. A missing solution file only
/// drops the temperature plots.
pub fn validate(args: &VisualizeArgs) -> Result<VisualizePlan, AnalyzerError> {
    let emissivity = match (&args.emissivity, args.resolution) {
        (Some(dataset), Some(resolution)) => Some(EmissivityRequest {
            dataset: dataset.clone(),
            resolution,
        }),
        (Some(_), None) => {
            return Err(AnalyzerError::Usage {
                subcommand: MODE,
                message: "--resolution is a required argument with --emissivity".to_string(),
            });
        }
        (None, _) => None,
    };

    let mut plan = VisualizePlan {
        emissivity,
        ..VisualizePlan::default()
    };

    if !args.wants_length_plots() {
        return Ok(plan);
    }

    let Some(solution) = &args.solution else {
        return Err(AnalyzerError::Usage {
            subcommand: MODE,
            message: "--solution is a required argument with -lvw, -lvt, -lvh".to_string(),
        });
    };

    if solution.is_file() {
        plan.length_plots = Some(LengthPlots {
            solution: solution.clone(),
            out_dir: args.out_dir.clone(),
            time_point: args.time_point,
            width: args.len_vs_width,
            height: args.len_vs_height,
            time: args.len_vs_time,
        });
    } else {
        plan.rejected = Some(AnalyzerError::Validation(format!(
            "Solution file {} does not exist, please provide a valid file to --solution",
            solution.display()
        )));
    }

    Ok(plan)
}
