// components/media_downloader/src/ytdlp.rs
use crate::types::{DownloadError, Downloader};
use crate::utils::format_duration;
use async_trait::async_trait;
use metadata_rules::MetadataRecord;
use serde::Deserialize;
use std::path::Path;
use tokio::process::Command;
use url::Url;

const AUDIO_QUALITY: &str = "320K";

pub struct YtDlp;

#[async_trait]
impl Downloader for YtDlp {
    async fn check_available(&self) -> Result<(), DownloadError> {
        which::which("yt-dlp")
            .map(|_| ())
            .map_err(|_| DownloadError::DependencyNotFound("yt-dlp"))
    }

    async fn fetch_metadata(
        &self,
        url: &Url,
        temp_dir: &Path,
    ) -> Result<MetadataRecord, DownloadError> {
        tracing::debug!(%url, temp_dir = %temp_dir.display(), "fetching metadata");

        let output = Command::new("yt-dlp")
            .arg("--dump-json")
            .arg("--no-download")
            .arg("--no-playlist")
            .arg(url.as_str())
            .current_dir(temp_dir)
            .output()
            .await?;

        if !output.status.success() {
            return Err(DownloadError::MetadataFailed(
                String::from_utf8_lossy(&output.stderr).trim().to_string(),
            ));
        }

        let yt_meta: YtDlpMetadata = serde_json::from_slice(&output.stdout)
            .map_err(|e| DownloadError::MetadataFailed(e.to_string()))?;

        tracing::debug!(?yt_meta, "yt-dlp metadata");
        Ok(yt_meta.into_record())
    }

    async fn download_audio(&self, url: &Url, temp_dir: &Path) -> Result<(), DownloadError> {
        let template = temp_dir.join("%(id)s.%(ext)s");
        let template = template.to_str().ok_or_else(|| {
            DownloadError::DownloadFailed("Invalid temporary output path".to_string())
        })?;

        tracing::info!(%url, "Downloading");

        let status = Command::new("yt-dlp")
            .arg("--extract-audio")
            .arg("--audio-format").arg("mp3")
            .arg("--audio-quality").arg(AUDIO_QUALITY)
            .arg("--format").arg("bestaudio/best")
            .arg("--no-playlist")
            .arg("-o").arg(template)
            .arg(url.as_str())
            .current_dir(temp_dir)
            .status()
            .await?;

        if !status.success() {
            return Err(DownloadError::DownloadFailed(format!(
                "yt-dlp exited with status: {}",
                status
            )));
        }

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
struct YtDlpMetadata {
    id: String,
    title: Option<String>,
    uploader: Option<String>,
    duration: Option<f64>,
    view_count: Option<u64>,
    description: Option<String>,
    /// `YYYYMMDD`
    upload_date: Option<String>,
    /// `YYYY-MM-DD`
    release_date: Option<String>,
}

impl YtDlpMetadata {
    fn into_record(self) -> MetadataRecord {
        let video_url = format!("https://www.youtube.com/watch?v={}", self.id);
        let year = self.year().unwrap_or_default();

        let mut record = MetadataRecord::new(self.id, video_url);
        record.title = self.title.unwrap_or_else(|| "Unknown".to_string());
        record.artist = self.uploader.unwrap_or_else(|| "Unknown".to_string());
        record.year = year;
        record.description = self.description.unwrap_or_default();
        record.duration = format_duration(self.duration.unwrap_or(0.0).max(0.0) as u64);
        record.view_count = self.view_count.map(|n| n.to_string()).unwrap_or_default();
        record
    }

    fn year(&self) -> Option<String> {
        let from_upload = self.upload_date.as_deref().and_then(|date| date.get(..4));
        let from_release = self
            .release_date
            .as_deref()
            .and_then(|date| date.split('-').next());

        from_upload
            .or(from_release)
            .filter(|year| !year.is_empty())
            .map(str::to_string)
    }
}
