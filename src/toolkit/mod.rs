//! Collaborators invoked by the mode handlers.
//!
//! The traits are the only surface the dispatcher relies on. The reference
//! implementations in `dataset`, `solver` and `figures` are what the binary
//! wires in; tests substitute recording fakes.

pub mod dataset;
pub mod errors;
pub mod figures;
pub mod solver;

use std::path::Path;
use std::rc::Rc;

use crate::logging::Logger;
use errors::ToolkitError;

/// Turns a layout description into a solver-ready dataset.
pub trait Preprocessor {
    fn build_from_layout(&mut self, layout: &Path, out_dir: &Path) -> Result<(), ToolkitError>;

    fn build_from_json(&mut self, json: &Path, out_dir: &Path) -> Result<(), ToolkitError>;
}

pub trait Solver {
    fn build(
        &mut self,
        dataset: &Path,
        resolution: u32,
        out_dir: Option<&Path>,
    ) -> Result<(), ToolkitError>;

    fn build_test_case(
        &mut self,
        id: u8,
        resolution: u32,
        out_dir: Option<&Path>,
    ) -> Result<(), ToolkitError>;

    fn run(&mut self, time_max: f64, time_step: f64, pulse_width: f64) -> Result<(), ToolkitError>;
}

pub trait Visualizer {
    fn plot_emissivity(&mut self, dataset: &Path, resolution: u32) -> Result<(), ToolkitError>;

    fn load_solution(&mut self, solution: &Path, out_dir: Option<&Path>)
    -> Result<(), ToolkitError>;

    fn plot_length_vs_width(&mut self, time_point: Option<f64>) -> Result<(), ToolkitError>;

    fn plot_length_vs_height(&mut self, time_point: Option<f64>) -> Result<(), ToolkitError>;

    fn plot_length_vs_time(&mut self) -> Result<(), ToolkitError>;

    /// Flush every figure produced so far.
    fn render(&mut self) -> Result<(), ToolkitError>;
}

/// The three collaborators handed to the dispatcher.
pub struct Toolkit {
    pub preprocessor: Box<dyn Preprocessor>,
    pub solver: Box<dyn Solver>,
    pub visualizer: Box<dyn Visualizer>,
}

impl Toolkit {
    pub fn new(
        preprocessor: Box<dyn Preprocessor>,
        solver: Box<dyn Solver>,
        visualizer: Box<dyn Visualizer>,
    ) -> Self {
        Self {
            preprocessor,
            solver,
            visualizer,
        }
    }

    /// Backends shipped with the binary.
    pub fn reference(log: Rc<Logger>) -> Self {
        Self::new(
            Box::new(dataset::LayoutPreprocessor::new(Rc::clone(&log))),
            Box::new(solver::ScheduleSolver::new(Rc::clone(&log))),
            Box::new(figures::FigureBoard::new(log)),
        )
    }
}
