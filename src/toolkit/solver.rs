use std::fs;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use super::Solver;
use super::dataset::read_manifest;
use super::errors::ToolkitError;
use crate::logging::Logger;

pub const SOLUTION_FILE: &str = "solution.json";
pub const TEST_CASES: RangeInclusive<u8> = 1..=3;

/// Tolerance when counting steps, so 10.0 / 0.1 does not become 101 steps.
const STEP_EPSILON: f64 = 1e-9;

/// Upper bound on the number of steps in one run.
pub const MAX_TIME_POINTS: usize = 1_000_000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModelSource {
    Dataset { path: PathBuf, crc32: u32 },
    TestCase { id: u8 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThermalModel {
    pub source: ModelSource,
    /// Lateral resolution in um.
    pub resolution: u32,
}

/// Output of a run, consumed by `visualize --solution`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolutionFile {
    pub model: ThermalModel,
    pub time_max: f64,
    pub time_step: f64,
    pub pulse_width: f64,
    pub time_points: Vec<f64>,
}

impl SolutionFile {
    pub fn final_time(&self) -> f64 {
        self.time_points.last().copied().unwrap_or(0.0)
    }

    pub fn covers(&self, time_point: f64) -> bool {
        (0.0..=self.final_time()).contains(&time_point)
    }
}

pub fn read_solution(path: &Path) -> Result<SolutionFile, ToolkitError> {
    let text = fs::read_to_string(path).map_err(|e| {
        ToolkitError::FileError(format!("failed to read solution {}: {}", path.display(), e))
    })?;
    serde_json::from_str(&text)
        .map_err(|e| ToolkitError::ParseError(format!("solution {}: {}", path.display(), e)))
}

/// Sample times from 0 to `time_max` inclusive; the last step is clamped to
/// `time_max` when it does not divide evenly.
pub fn time_grid(time_max: f64, time_step: f64) -> Vec<f64> {
    let steps = (time_max / time_step - STEP_EPSILON).ceil().max(0.0) as usize;
    (0..=steps)
        .map(|i| (i as f64 * time_step).min(time_max))
        .collect()
}

fn check_timing(time_max: f64, time_step: f64, pulse_width: f64) -> Result<(), ToolkitError> {
    if !time_max.is_finite() || time_max <= 0.0 {
        return Err(ToolkitError::InvalidParameter(format!(
            "time_max must be positive, got {time_max}"
        )));
    }
    if !time_step.is_finite() || time_step <= 0.0 {
        return Err(ToolkitError::InvalidParameter(format!(
            "time_step must be positive, got {time_step}"
        )));
    }
    if time_step > time_max {
        return Err(ToolkitError::InvalidParameter(format!(
            "time_step {time_step} exceeds time_max {time_max}"
        )));
    }
    let steps = time_max / time_step;
    if !steps.is_finite() || steps > MAX_TIME_POINTS as f64 {
        return Err(ToolkitError::InvalidParameter(format!(
            "time_max {time_max} / time_step {time_step} exceeds {MAX_TIME_POINTS} time points"
        )));
    }
    if !pulse_width.is_finite() || pulse_width < 0.0 {
        return Err(ToolkitError::InvalidParameter(format!(
            "time_pulse must be non-negative, got {pulse_width}"
        )));
    }
    Ok(())
}

/// Builds the model description and writes the run schedule as the solution.
pub struct ScheduleSolver {
    log: Rc<Logger>,
    model: Option<ThermalModel>,
    out_dir: PathBuf,
}

impl ScheduleSolver {
    pub fn new(log: Rc<Logger>) -> Self {
        Self {
            log,
            model: None,
            out_dir: PathBuf::from("."),
        }
    }

    fn set_model(&mut self, model: ThermalModel, out_dir: Option<&Path>) {
        self.out_dir = out_dir.map_or_else(|| PathBuf::from("."), Path::to_path_buf);
        self.model = Some(model);
    }
}

impl Solver for ScheduleSolver {
    fn build(
        &mut self,
        dataset: &Path,
        resolution: u32,
        out_dir: Option<&Path>,
    ) -> Result<(), ToolkitError> {
        let manifest = read_manifest(dataset)?;
        self.log.status(format!(
            "Building model from {} at {} um",
            dataset.display(),
            resolution
        ));
        self.set_model(
            ThermalModel {
                source: ModelSource::Dataset {
                    path: dataset.to_path_buf(),
                    crc32: manifest.crc32,
                },
                resolution,
            },
            out_dir,
        );
        Ok(())
    }

    fn build_test_case(
        &mut self,
        id: u8,
        resolution: u32,
        out_dir: Option<&Path>,
    ) -> Result<(), ToolkitError> {
        if !TEST_CASES.contains(&id) {
            return Err(ToolkitError::InvalidParameter(format!(
                "unknown test case {id}"
            )));
        }
        self.log
            .status(format!("Building test case {id} at {resolution} um"));
        self.set_model(
            ThermalModel {
                source: ModelSource::TestCase { id },
                resolution,
            },
            out_dir,
        );
        Ok(())
    }

    fn run(&mut self, time_max: f64, time_step: f64, pulse_width: f64) -> Result<(), ToolkitError> {
        check_timing(time_max, time_step, pulse_width)?;
        let model = self.model.clone().ok_or_else(|| {
            ToolkitError::InvalidState("solver run requested before a model was built".to_string())
        })?;

        let solution = SolutionFile {
            model,
            time_max,
            time_step,
            pulse_width,
            time_points: time_grid(time_max, time_step),
        };
        self.log.info(format!(
            "Solving {} time points up to {:e} s",
            solution.time_points.len(),
            time_max
        ));

        fs::create_dir_all(&self.out_dir).map_err(|e| {
            ToolkitError::FileError(format!(
                "failed to create output directory {}: {}",
                self.out_dir.display(),
                e
            ))
        })?;
        let target = self.out_dir.join(SOLUTION_FILE);
        let json = serde_json::to_string_pretty(&solution)
            .map_err(|e| ToolkitError::ParseError(format!("solution: {}", e)))?;
        fs::write(&target, json).map_err(|e| {
            ToolkitError::FileError(format!("failed to write {}: {}", target.display(), e))
        })?;

        self.log.status(format!("Wrote solution {}", target.display()));
        Ok(())
    }
}
