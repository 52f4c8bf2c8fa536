use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct SimulateArgs {
    #[arg(
        short = 'g',
        long = "preprocessedGDS",
        value_name = "FILE",
        conflicts_with = "test_case",
        required_unless_present = "test_case",
        help = "Path to the preprocessed dataset"
    )]
    pub dataset: Option<PathBuf>,

    #[arg(
        short = 't',
        long = "testcase",
        value_name = "ID",
        value_parser = clap::value_parser!(u8).range(1..=3),
        required_unless_present = "dataset",
        help = "Run a predefined test case (1, 2 or 3)"
    )]
    pub test_case: Option<u8>,

    #[arg(
        short = 'r',
        long = "resolution",
        value_name = "UM",
        value_parser = clap::value_parser!(u32).range(1..),
        help = "Lateral resolution in um"
    )]
    pub resolution: u32,

    #[arg(
        long = "time_max",
        value_name = "SECONDS",
        allow_negative_numbers = true,
        help = "Maximum simulated time (also accepted as -tm)"
    )]
    pub time_max: f64,

    #[arg(
        long = "time_step",
        value_name = "SECONDS",
        allow_negative_numbers = true,
        help = "Time step of the simulation (also accepted as -ts)"
    )]
    pub time_step: f64,

    #[arg(
        long = "time_pulse",
        value_name = "SECONDS",
        allow_negative_numbers = true,
        help = "Duration of the lamp pulse (also accepted as -tp)"
    )]
    pub pulse_width: f64,

    #[arg(
        short = 'o',
        long = "outDir",
        value_name = "DIR",
        help = "Destination directory for solution files (created if missing)"
    )]
    pub out_dir: Option<PathBuf>,
}
