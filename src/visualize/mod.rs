pub mod args;
pub mod validate;

use crate::error::AnalyzerError;
use crate::logging::Logger;
use crate::toolkit::Visualizer;
use crate::toolkit::errors::ToolkitError;
use args::VisualizeArgs;
use validate::VisualizePlan;

const MODE: &str = "visualize";

pub fn run(
    args: &VisualizeArgs,
    visualizer: &mut dyn Visualizer,
    log: &Logger,
) -> Result<(), AnalyzerError> {
    let plan = validate::validate(args)?;

    if args.time_point.is_some() && !(args.len_vs_width || args.len_vs_height) {
        log.warning("--time_point only applies to -lvw and -lvh.");
    }

    produce(&plan, visualizer, log).map_err(|e| AnalyzerError::from_toolkit(MODE, e))?;

    match plan.rejected {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

fn produce(
    plan: &VisualizePlan,
    visualizer: &mut dyn Visualizer,
    log: &Logger,
) -> Result<(), ToolkitError> {
    if !plan.has_artifacts() {
        if plan.rejected.is_none() {
            log.warning("Nothing to visualize; pass --emissivity or one of -lvw, -lvt, -lvh.");
        }
        return Ok(());
    }

    if let Some(request) = &plan.emissivity {
        log.status(format!(
            "Plotting emissivity of {}",
            request.dataset.display()
        ));
        visualizer.plot_emissivity(&request.dataset, request.resolution)?;
    }

    if let Some(plots) = &plan.length_plots {
        log.status(format!("Loading solution {}", plots.solution.display()));
        visualizer.load_solution(&plots.solution, plots.out_dir.as_deref())?;
        if plots.width {
            visualizer.plot_length_vs_width(plots.time_point)?;
        }
        if plots.height {
            visualizer.plot_length_vs_height(plots.time_point)?;
        }
        if plots.time {
            visualizer.plot_length_vs_time()?;
        }
    }

    visualizer.render()
}
