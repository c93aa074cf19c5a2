// components/media_downloader/src/utils.rs
use crate::types::DownloadError;
use std::path::PathBuf;
use url::Url;

const YOUTUBE_HOSTS: [&str; 7] = [
    "youtube.com",
    "www.youtube.com",
    "m.youtube.com",
    "youtu.be",
    "www.youtu.be",
    "youtube-nocookie.com",
    "www.youtube-nocookie.com",
];

/// Parse `raw` and check that it points at something on YouTube
pub fn validate_youtube_url(raw: &str) -> Result<Url, DownloadError> {
    let url = Url::parse(raw).map_err(|e| DownloadError::InvalidUrl(format!("{raw} ({e})")))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(DownloadError::InvalidUrl(format!(
            "{raw} (unsupported scheme '{}')",
            url.scheme()
        )));
    }

    let host = url.host_str().unwrap_or_default().to_ascii_lowercase();
    if !YOUTUBE_HOSTS.contains(&host.as_str()) {
        return Err(DownloadError::InvalidUrl(format!("{raw} (not a YouTube host)")));
    }

    if matches!(url.path(), "" | "/") && url.query().is_none() {
        return Err(DownloadError::InvalidUrl(format!("{raw} (no video given)")));
    }

    Ok(url)
}

/// Sanitize a filename by removing only characters filesystems reject.
///
/// Punctuation such as `- _ () [] & +` is kept.
pub fn sanitize_filename(name: &str) -> String {
    let kept: String = name
        .chars()
        .filter(|c| {
            !c.is_control() && !matches!(c, '/' | '\\' | '<' | '>' | ':' | '*' | '?' | '"' | '|')
        })
        .collect();

    kept.trim_matches(|c| c == '.' || c == ' ')
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Output filename for a video title
pub fn audio_filename(title: &str) -> PathBuf {
    let stem = sanitize_filename(title);
    let stem = if stem.is_empty() { "download" } else { stem.as_str() };
    PathBuf::from(format!("{stem}.mp3"))
}

/// `M:SS`, or `H:MM:SS` from one hour up
pub fn format_duration(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{}:{:02}", minutes, seconds)
    }
}
