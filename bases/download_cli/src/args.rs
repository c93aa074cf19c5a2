// bases/download_cli/src/args.rs
use clap::Parser;
use std::path::PathBuf;

/// Extract audio from YouTube videos and save it as MP3 with metadata
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// YouTube URL to scrape (not needed with --save-rules)
    #[arg(required_unless_present = "save_rules")]
    pub url: Option<String>,

    /// Output directory for MP3 files
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Review and edit the metadata before it is written
    #[arg(short, long)]
    pub interactive: bool,

    /// JSON file with custom tagging rules
    #[arg(short, long, value_name = "PATH")]
    pub rules: Option<PathBuf>,

    /// Write a template rules file to PATH and exit
    #[arg(long, value_name = "PATH")]
    pub save_rules: Option<PathBuf>,
}
