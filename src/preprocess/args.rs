use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct PreprocessArgs {
    #[arg(
        short = 'j',
        long = "json",
        value_name = "FILE",
        conflicts_with = "gds_file",
        required_unless_present = "gds_file",
        help = "Load layout information from a JSON file"
    )]
    pub json_file: Option<PathBuf>,

    #[arg(
        short = 'g',
        long = "gds",
        value_name = "FILE",
        required_unless_present = "json_file",
        help = "Load layout information from a GDSII file"
    )]
    pub gds_file: Option<PathBuf>,

    #[arg(
        short = 'o',
        long = "outDir",
        value_name = "DIR",
        help = "Destination directory for the dataset (created if missing)"
    )]
    pub out_dir: PathBuf,
}
