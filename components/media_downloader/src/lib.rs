// components/media_downloader/src/lib.rs
mod types;
mod utils;
mod ytdlp;

use metadata_rules::MetadataRecord;
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub use types::{DownloadError, Downloader};
pub use utils::{audio_filename, format_duration, sanitize_filename, validate_youtube_url};
pub use ytdlp::YtDlp;

const WORK_DIR_PREFIX: &str = ".download-";

pub struct MediaDownloader {
    download_path: PathBuf,
    downloader: Arc<dyn Downloader + Send + Sync>,
}

impl MediaDownloader {
    /// Create a new MediaDownloader that will store MP3 files in the given directory
    pub async fn new(download_path: impl AsRef<Path>) -> Result<Self, DownloadError> {
        Self::new_with_downloader(download_path, Arc::new(YtDlp)).await
    }

    /// Create a new MediaDownloader with a specific downloader implementation
    pub async fn new_with_downloader(
        download_path: impl AsRef<Path>,
        downloader: Arc<dyn Downloader + Send + Sync>,
    ) -> Result<Self, DownloadError> {
        downloader.check_available().await?;

        Ok(Self {
            download_path: download_path.as_ref().to_owned(),
            downloader,
        })
    }

    /// Download a video's audio as MP3, returning its path and the fetched metadata.
    ///
    /// yt-dlp works in a per-run directory under the output directory that is
    /// removed on every exit path. Nothing is created for an invalid URL.
    pub async fn download(&self, url: &str) -> Result<(PathBuf, MetadataRecord), DownloadError> {
        let url = validate_youtube_url(url)?;

        tokio::fs::create_dir_all(&self.download_path).await?;
        let temp_dir = tempfile::Builder::new()
            .prefix(WORK_DIR_PREFIX)
            .tempdir_in(&self.download_path)?;

        // Get metadata first
        let metadata = self.downloader.fetch_metadata(&url, temp_dir.path()).await?;

        self.downloader.download_audio(&url, temp_dir.path()).await?;

        let source = find_mp3(temp_dir.path()).await?;
        let final_path = self.download_path.join(audio_filename(&metadata.title));
        tokio::fs::rename(&source, &final_path).await?;
        temp_dir.close()?;

        tracing::debug!(path = %final_path.display(), "audio saved");
        Ok((final_path, metadata))
    }
}

async fn find_mp3(dir: &Path) -> Result<PathBuf, DownloadError> {
    let mut entries = tokio::fs::read_dir(dir).await?;
    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("mp3")) {
            return Ok(path);
        }
    }
    Err(DownloadError::NoAudioProduced(dir.to_path_buf()))
}
