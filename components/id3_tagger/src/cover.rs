// components/id3_tagger/src/cover.rs
use std::time::Duration;
use thiserror::Error;

const THUMBNAIL_TIMEOUT: Duration = Duration::from_secs(10);

/// Best quality first
const THUMBNAIL_QUALITIES: [&str; 4] = ["maxresdefault", "sddefault", "hqdefault", "default"];

#[derive(Debug, Error)]
pub enum CoverError {
    #[error("no video id to look up a thumbnail for")]
    NoVideoId,

    #[error("failed to create HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("failed to download thumbnail from all available URLs for video {0}")]
    Unavailable(String),
}

/// Front cover image ready to embed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverArt {
    pub data: Vec<u8>,
    pub mime_type: &'static str,
    pub source_url: String,
}

/// Thumbnail URLs for a video, in the order they should be tried
pub fn thumbnail_urls(video_id: &str) -> Vec<String> {
    THUMBNAIL_QUALITIES
        .iter()
        .map(|quality| format!("https://img.youtube.com/vi/{video_id}/{quality}.jpg"))
        .collect()
}

pub struct CoverArtFetcher {
    client: reqwest::Client,
}

impl CoverArtFetcher {
    pub fn new() -> Result<Self, CoverError> {
        let client = reqwest::Client::builder()
            .timeout(THUMBNAIL_TIMEOUT)
            .build()
            .map_err(CoverError::Client)?;
        Ok(Self { client })
    }

    /// Download the best available thumbnail for `video_id`
    pub async fn fetch(&self, video_id: &str) -> Result<CoverArt, CoverError> {
        if video_id.is_empty() {
            return Err(CoverError::NoVideoId);
        }

        for url in thumbnail_urls(video_id) {
            match self.get(&url).await {
                Ok(data) if !data.is_empty() => {
                    tracing::debug!(%url, bytes = data.len(), "downloaded thumbnail");
                    return Ok(CoverArt {
                        data,
                        mime_type: "image/jpeg",
                        source_url: url,
                    });
                }
                Ok(_) => tracing::debug!(%url, "thumbnail was empty"),
                Err(error) => tracing::debug!(%url, %error, "failed to download thumbnail"),
            }
        }

        Err(CoverError::Unavailable(video_id.to_string()))
    }

    async fn get(&self, url: &str) -> Result<Vec<u8>, reqwest::Error> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        Ok(response.bytes().await?.to_vec())
    }
}
