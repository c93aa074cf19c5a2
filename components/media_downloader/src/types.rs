// components/media_downloader/src/types.rs
use metadata_rules::MetadataRecord;
use std::path::{Path, PathBuf};
use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("Required dependency not found: {0}")]
    DependencyNotFound(&'static str),

    #[error("Invalid YouTube URL: {0}")]
    InvalidUrl(String),

    #[error("Failed to fetch video metadata: {0}")]
    MetadataFailed(String),

    #[error("Download failed: {0}")]
    DownloadFailed(String),

    #[error("No MP3 file generated in {}", .0.display())]
    NoAudioProduced(PathBuf),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

#[async_trait::async_trait]
pub trait Downloader {
    /// Check if the downloader is available and has all required dependencies
    async fn check_available(&self) -> Result<(), DownloadError>;

    /// Fetch metadata about a video without downloading it
    async fn fetch_metadata(
        &self,
        url: &Url,
        temp_dir: &Path,
    ) -> Result<MetadataRecord, DownloadError>;

    /// Download the audio track and convert it to MP3 inside `temp_dir`
    async fn download_audio(&self, url: &Url, temp_dir: &Path) -> Result<(), DownloadError>;
}
