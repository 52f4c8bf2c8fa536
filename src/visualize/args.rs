use clap::Args;
use std::path::PathBuf;

// Which combinations are required is checked in `validate`, after parsing.
#[derive(Args, Debug, Clone, Default)]
pub struct VisualizeArgs {
    #[arg(
        short = 'e',
        long = "emissivity",
        value_name = "FILE",
        help_heading = "Emissivity",
        help = "Path to the preprocessed dataset for the emissivity plot"
    )]
    pub emissivity: Option<PathBuf>,

    #[arg(
        short = 'r',
        long = "resolution",
        value_name = "UM",
        value_parser = clap::value_parser!(u32).range(1..),
        help_heading = "Emissivity",
        help = "Resolution in um for the emissivity plot"
    )]
    pub resolution: Option<u32>,

    #[arg(
        short = 'o',
        long = "outDir",
        value_name = "DIR",
        help = "Destination directory for figures (created if missing)"
    )]
    pub out_dir: Option<PathBuf>,

    #[arg(
        short = 't',
        long = "time_point",
        value_name = "SECONDS",
        allow_negative_numbers = true,
        help_heading = "Temperature plots",
        help = "Time point at which to plot the result"
    )]
    pub time_point: Option<f64>,

    #[arg(
        long = "lenVwidth",
        help_heading = "Temperature plots",
        help = "Plot length vs width at the time point (also accepted as -lvw)"
    )]
    pub len_vs_width: bool,

    #[arg(
        long = "lenVtime",
        help_heading = "Temperature plots",
        help = "Plot length vs time along the center of the design (also accepted as -lvt)"
    )]
    pub len_vs_time: bool,

    #[arg(
        long = "lenVheight",
        help_heading = "Temperature plots",
        help = "Plot length vs height at the time point (also accepted as -lvh)"
    )]
    pub len_vs_height: bool,

    #[arg(
        short = 's',
        long = "solution",
        value_name = "FILE",
        help_heading = "Temperature plots",
        help = "Solution file written by simulate"
    )]
    pub solution: Option<PathBuf>,
}

impl VisualizeArgs {
    pub fn wants_length_plots(&self) -> bool {
        self.len_vs_width || self.len_vs_time || self.len_vs_height
    }
}
