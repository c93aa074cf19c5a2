// bases/download_cli/src/output.rs
use id3_tagger::TagSummary;
use metadata_rules::MetadataRecord;
use std::path::Path;

pub struct OutputHandler {
    verbose: bool,
}

impl OutputHandler {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    pub fn print_rules_saved(&self, path: &Path) {
        println!("Template rules file created: {}", path.display());
        println!("Edit this file to customize metadata tagging rules");
    }

    pub fn print_download_start(&self, url: &str) {
        println!("Starting download from: {}", url);
    }

    pub fn print_download_complete(&self, path: &Path, metadata: &MetadataRecord) {
        println!("Downloaded: {} to {}", metadata.title, path.display());
        println!("Uploader: {}", metadata.artist);
        println!("Duration: {}", metadata.duration);

        if self.verbose {
            println!("Source: {}", metadata.video_url());
            if !metadata.year.is_empty() {
                println!("Year: {}", metadata.year);
            }
            if !metadata.view_count.is_empty() {
                println!("Views: {}", metadata.view_count);
            }
        }
    }

    pub fn print_tagged(&self, path: &Path, summary: &TagSummary) {
        println!("Metadata added: {}", summary);
        println!("✓ Saved to: {}", path.display());
    }

    pub fn print_error(&self, error: &color_eyre::Report) {
        eprintln!("Error: {}", error);

        if self.verbose {
            eprintln!("\nError details:");
            error.chain().skip(1).for_each(|cause| {
                eprintln!("  caused by: {}", cause);
            });
        }
    }
}
