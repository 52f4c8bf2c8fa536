use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use indexmap::IndexMap;
use serde::Serialize;

use super::Visualizer;
use super::dataset::read_manifest;
use super::errors::ToolkitError;
use super::solver::{SolutionFile, read_solution};
use crate::logging::Logger;
use crate::visuals;

pub const FIGURE_INDEX: &str = "figures.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FigureKind {
    Emissivity,
    LengthVsWidth,
    LengthVsHeight,
    LengthVsTime,
}

impl FigureKind {
    pub fn key(&self) -> &'static str {
        match self {
            Self::Emissivity => "emissivity",
            Self::LengthVsWidth => "length_vs_width",
            Self::LengthVsHeight => "length_vs_height",
            Self::LengthVsTime => "length_vs_time",
        }
    }
}

impl fmt::Display for FigureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let title = match self {
            Self::Emissivity => "Emissivity",
            Self::LengthVsWidth => "Length vs width",
            Self::LengthVsHeight => "Length vs height",
            Self::LengthVsTime => "Length vs time",
        };
        f.write_str(title)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub kind: FigureKind,
    pub source: PathBuf,
    pub resolution: Option<u32>,
    pub time_point: Option<f64>,
}

/// Collects the requested figures and flushes them on `render`.
pub struct FigureBoard {
    log: Rc<Logger>,
    solution: Option<(PathBuf, SolutionFile)>,
    out_dir: Option<PathBuf>,
    figures: IndexMap<&'static str, Figure>,
}

impl FigureBoard {
    pub fn new(log: Rc<Logger>) -> Self {
        Self {
            log,
            solution: None,
            out_dir: None,
            figures: IndexMap::new(),
        }
    }

    pub fn figures(&self) -> impl Iterator<Item = &Figure> {
        self.figures.values()
    }

    fn loaded(&self) -> Result<&(PathBuf, SolutionFile), ToolkitError> {
        self.solution.as_ref().ok_or_else(|| {
            ToolkitError::InvalidState("no solution loaded for temperature plots".to_string())
        })
    }

    fn add(&mut self, figure: Figure) {
        self.log.info(format!(
            "Prepared {} plot from {}",
            figure.kind,
            figure.source.display()
        ));
        self.figures.insert(figure.kind.key(), figure);
    }

    fn plot_at(&mut self, kind: FigureKind, time_point: Option<f64>) -> Result<(), ToolkitError> {
        let (path, solution) = self.loaded()?;
        let time = time_point.unwrap_or_else(|| solution.final_time());
        if !solution.covers(time) {
            return Err(ToolkitError::InvalidParameter(format!(
                "time point {time} is outside the solution range 0..={}",
                solution.final_time()
            )));
        }
        let figure = Figure {
            kind,
            source: path.clone(),
            resolution: Some(solution.model.resolution),
            time_point: Some(time),
        };
        self.add(figure);
        Ok(())
    }

    fn write_index(&self, out_dir: &Path) -> Result<(), ToolkitError> {
        fs::create_dir_all(out_dir).map_err(|e| {
            ToolkitError::FileError(format!(
                "failed to create output directory {}: {}",
                out_dir.display(),
                e
            ))
        })?;
        let target = out_dir.join(FIGURE_INDEX);
        let json = serde_json::to_string_pretty(&self.figures)
            .map_err(|e| ToolkitError::ParseError(format!("figure index: {}", e)))?;
        fs::write(&target, json).map_err(|e| {
            ToolkitError::FileError(format!("failed to write {}: {}", target.display(), e))
        })?;
        self.log.status(format!("Wrote figure index {}", target.display()));
        Ok(())
    }
}

impl Visualizer for FigureBoard {
    fn plot_emissivity(&mut self, dataset: &Path, resolution: u32) -> Result<(), ToolkitError> {
        read_manifest(dataset)?;
        self.add(Figure {
            kind: FigureKind::Emissivity,
            source: dataset.to_path_buf(),
            resolution: Some(resolution),
            time_point: None,
        });
        Ok(())
    }

    fn load_solution(
        &mut self,
        solution: &Path,
        out_dir: Option<&Path>,
    ) -> Result<(), ToolkitError> {
        let loaded = read_solution(solution)?;
        self.log.info(format!(
            "Loaded solution {} ({} time points)",
            solution.display(),
            loaded.time_points.len()
        ));
        self.solution = Some((solution.to_path_buf(), loaded));
        self.out_dir = out_dir.map(Path::to_path_buf);
        Ok(())
    }

    fn plot_length_vs_width(&mut self, time_point: Option<f64>) -> Result<(), ToolkitError> {
        self.plot_at(FigureKind::LengthVsWidth, time_point)
    }

    fn plot_length_vs_height(&mut self, time_point: Option<f64>) -> Result<(), ToolkitError> {
        self.plot_at(FigureKind::LengthVsHeight, time_point)
    }

    fn plot_length_vs_time(&mut self) -> Result<(), ToolkitError> {
        let (path, solution) = self.loaded()?;
        let figure = Figure {
            kind: FigureKind::LengthVsTime,
            source: path.clone(),
            resolution: Some(solution.model.resolution),
            time_point: None,
        };
        self.add(figure);
        Ok(())
    }

    fn render(&mut self) -> Result<(), ToolkitError> {
        if self.figures.is_empty() {
            self.log.warning("No figures were requested.");
            return Ok(());
        }

        visuals::print_figures(self.figures.values());
        if let Some(out_dir) = &self.out_dir {
            self.write_index(out_dir)?;
        }
        self.figures.clear();
        Ok(())
    }
}
