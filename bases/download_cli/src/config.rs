// bases/download_cli/src/config.rs
use crate::args::Args;
use color_eyre::eyre::eyre;
use color_eyre::Result;
use std::path::PathBuf;

const CRATES: [&str; 4] = [
    "download_cli",
    "media_downloader",
    "metadata_rules",
    "id3_tagger",
];

/// What a run should do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Write the rules template and stop
    SaveRules(PathBuf),
    Scrape(ScrapeConfig),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapeConfig {
    pub url: String,
    pub output_dir: PathBuf,
    pub interactive: bool,
    pub rules: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub mode: Mode,
    pub verbose: bool,
}

impl Config {
    /// Create configuration from CLI arguments
    pub fn from_args(args: Args) -> Result<Self> {
        let mode = match (args.save_rules, args.url) {
            (Some(path), _) => Mode::SaveRules(path),
            (None, Some(url)) => Mode::Scrape(ScrapeConfig {
                url,
                output_dir: args.output,
                interactive: args.interactive,
                rules: args.rules,
            }),
            (None, None) => {
                return Err(eyre!(
                    "URL argument is required (unless using --save-rules)"
                ))
            }
        };

        Ok(Self {
            mode,
            verbose: args.verbose,
        })
    }

    /// Default log filter when `RUST_LOG` is not set
    pub fn log_filter(&self) -> String {
        let level = if self.verbose { "debug" } else { "info" };
        CRATES
            .iter()
            .map(|name| format!("{name}={level}"))
            .collect::<Vec<_>>()
            .join(",")
    }
}
