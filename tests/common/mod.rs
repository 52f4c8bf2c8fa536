#![allow(dead_code)]

use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use thermal_analyzer::args::Args;
use thermal_analyzer::logging::{LOGGER_NAME, Logger, Severity, SharedBuffer, Sink};
use thermal_analyzer::toolkit::errors::ToolkitError;
use thermal_analyzer::toolkit::{Preprocessor, Solver, Toolkit, Visualizer};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    BuildFromLayout(PathBuf, PathBuf),
    BuildFromJson(PathBuf, PathBuf),
    Build(PathBuf, u32, Option<PathBuf>),
    BuildTestCase(u8, u32, Option<PathBuf>),
    Run(f64, f64, f64),
    PlotEmissivity(PathBuf, u32),
    LoadSolution(PathBuf, Option<PathBuf>),
    PlotLengthVsWidth(Option<f64>),
    PlotLengthVsHeight(Option<f64>),
    PlotLengthVsTime,
    Render,
}

/// Collaborator stand-in that records every call. JSON preprocessing reports
/// not-implemented, like the shipped backend.
#[derive(Clone, Default)]
pub struct Recorder {
    calls: Rc<RefCell<Vec<Call>>>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn toolkit(&self) -> Toolkit {
        Toolkit::new(
            Box::new(self.clone()),
            Box::new(self.clone()),
            Box::new(self.clone()),
        )
    }

    fn push(&self, call: Call) -> Result<(), ToolkitError> {
        self.calls.borrow_mut().push(call);
        Ok(())
    }
}

impl Preprocessor for Recorder {
    fn build_from_layout(&mut self, layout: &Path, out_dir: &Path) -> Result<(), ToolkitError> {
        self.push(Call::BuildFromLayout(layout.to_path_buf(), out_dir.to_path_buf()))
    }

    fn build_from_json(&mut self, json: &Path, out_dir: &Path) -> Result<(), ToolkitError> {
        self.push(Call::BuildFromJson(json.to_path_buf(), out_dir.to_path_buf()))?;
        Err(ToolkitError::NotImplemented("Reading layouts from JSON".to_string()))
    }
}

impl Solver for Recorder {
    fn build(
        &mut self,
        dataset: &Path,
        resolution: u32,
        out_dir: Option<&Path>,
    ) -> Result<(), ToolkitError> {
        self.push(Call::Build(
            dataset.to_path_buf(),
            resolution,
            out_dir.map(Path::to_path_buf),
        ))
    }

    fn build_test_case(
        &mut self,
        id: u8,
        resolution: u32,
        out_dir: Option<&Path>,
    ) -> Result<(), ToolkitError> {
        self.push(Call::BuildTestCase(id, resolution, out_dir.map(Path::to_path_buf)))
    }

    fn run(&mut self, time_max: f64, time_step: f64, pulse_width: f64) -> Result<(), ToolkitError> {
        self.push(Call::Run(time_max, time_step, pulse_width))
    }
}

impl Visualizer for Recorder {
    fn plot_emissivity(&mut self, dataset: &Path, resolution: u32) -> Result<(), ToolkitError> {
        self.push(Call::PlotEmissivity(dataset.to_path_buf(), resolution))
    }

    fn load_solution(
        &mut self,
        solution: &Path,
        out_dir: Option<&Path>,
    ) -> Result<(), ToolkitError> {
        self.push(Call::LoadSolution(
            solution.to_path_buf(),
            out_dir.map(Path::to_path_buf),
        ))
    }

    fn plot_length_vs_width(&mut self, time_point: Option<f64>) -> Result<(), ToolkitError> {
        self.push(Call::PlotLengthVsWidth(time_point))
    }

    fn plot_length_vs_height(&mut self, time_point: Option<f64>) -> Result<(), ToolkitError> {
        self.push(Call::PlotLengthVsHeight(time_point))
    }

    fn plot_length_vs_time(&mut self) -> Result<(), ToolkitError> {
        self.push(Call::PlotLengthVsTime)
    }

    fn render(&mut self) -> Result<(), ToolkitError> {
        self.push(Call::Render)
    }
}

/// Logger writing every level to an in-memory console.
pub fn capture_logger() -> (Logger, SharedBuffer) {
    let buffer = SharedBuffer::new();
    let console = Sink::console(Severity::Debug, Box::new(buffer.clone()));
    (Logger::with_sinks(LOGGER_NAME, console, None), buffer)
}

pub fn quiet_logger() -> Rc<Logger> {
    let console = Sink::console(Severity::Critical, Box::new(SharedBuffer::new()));
    Rc::new(Logger::with_sinks(LOGGER_NAME, console, None))
}

pub fn parse(argv: &[&str]) -> Args {
    let mut full = vec!["ThermalAnalyzer"];
    full.extend_from_slice(argv);
    Args::try_parse_legacy(full).expect("command line parses")
}

pub fn parse_err(argv: &[&str]) -> clap::Error {
    let mut full = vec!["ThermalAnalyzer"];
    full.extend_from_slice(argv);
    Args::try_parse_legacy(full).expect_err("command line is rejected")
}
