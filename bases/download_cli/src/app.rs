// bases/download_cli/src/app.rs
use crate::config::{Config, Mode, ScrapeConfig};
use crate::output::OutputHandler;
use color_eyre::Result;
use id3_tagger::{CoverArt, CoverArtFetcher};
use media_downloader::{Downloader, MediaDownloader, YtDlp};
use metadata_rules::{pipeline, InteractiveEditor, MetadataEditor, MetadataRecord, RulesConfig};
use std::path::Path;
use std::sync::Arc;

pub struct App {
    config: Config,
    output: OutputHandler,
    downloader: Arc<dyn Downloader + Send + Sync>,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self::with_downloader(config, Arc::new(YtDlp))
    }

    pub fn with_downloader(config: Config, downloader: Arc<dyn Downloader + Send + Sync>) -> Self {
        let output = OutputHandler::new(config.verbose);
        Self {
            config,
            output,
            downloader,
        }
    }

    pub async fn run(&self) -> Result<()> {
        match &self.config.mode {
            Mode::SaveRules(path) => self.save_rules(path),
            Mode::Scrape(scrape) => self.scrape(scrape).await,
        }
    }

    fn save_rules(&self, path: &Path) -> Result<()> {
        RulesConfig::write_template(path)?;
        self.output.print_rules_saved(path);
        Ok(())
    }

    async fn scrape(&self, scrape: &ScrapeConfig) -> Result<()> {
        // Rules go first so a broken file fails before anything is downloaded
        let rules = scrape
            .rules
            .as_deref()
            .map(RulesConfig::from_file)
            .transpose()?;

        let downloader =
            MediaDownloader::new_with_downloader(&scrape.output_dir, self.downloader.clone())
                .await?;

        self.output.print_download_start(&scrape.url);
        let (path, metadata) = downloader.download(&scrape.url).await?;
        self.output.print_download_complete(&path, &metadata);

        let metadata = if scrape.interactive {
            let stdin = std::io::stdin();
            let mut editor = InteractiveEditor::new(stdin.lock(), std::io::stdout());
            let editor: &mut dyn MetadataEditor = &mut editor;
            pipeline::prepare(metadata, rules.as_ref(), Some(editor))?
        } else {
            pipeline::prepare(metadata, rules.as_ref(), None)?
        };

        let cover = self.fetch_cover(&metadata).await;
        let summary = id3_tagger::write_tags(&path, &metadata, cover.as_ref())?;
        self.output.print_tagged(&path, &summary);

        Ok(())
    }

    /// Cover art is optional; failures are logged and tagging goes on without it
    async fn fetch_cover(&self, metadata: &MetadataRecord) -> Option<CoverArt> {
        let fetched = match CoverArtFetcher::new() {
            Ok(fetcher) => fetcher.fetch(metadata.video_id()).await,
            Err(error) => Err(error),
        };

        match fetched {
            Ok(cover) => Some(cover),
            Err(error) => {
                tracing::warn!(%error, "Could not add cover art");
                None
            }
        }
    }

    pub fn print_error(&self, error: &color_eyre::Report) {
        self.output.print_error(error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use id3::TagLike;
    use media_downloader::DownloadError;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use url::Url;

    /// Stands in for yt-dlp. The record has no video id, so cover art is
    /// skipped without touching the network.
    struct FakeYtDlp;

    #[async_trait]
    impl Downloader for FakeYtDlp {
        async fn check_available(&self) -> Result<(), DownloadError> {
            Ok(())
        }

        async fn fetch_metadata(
            &self,
            url: &Url,
            _temp_dir: &Path,
        ) -> Result<MetadataRecord, DownloadError> {
            let mut record = MetadataRecord::new("", url.as_str());
            record.title = "Song".to_string();
            record.artist = "Artist".to_string();
            record.duration = "3:32".to_string();
            record.view_count = "100".to_string();
            Ok(record)
        }

        async fn download_audio(&self, _url: &Url, temp_dir: &Path) -> Result<(), DownloadError> {
            let frame = [0xFF, 0xFB, 0x90, 0x64, 0x00, 0x00, 0x00, 0x00];
            tokio::fs::write(temp_dir.join("video.mp3"), frame).await?;
            Ok(())
        }
    }

    fn scrape(output_dir: PathBuf, rules: Option<PathBuf>) -> Mode {
        Mode::Scrape(ScrapeConfig {
            url: "https://youtu.be/x".to_string(),
            output_dir,
            interactive: false,
            rules,
        })
    }

    fn app(mode: Mode) -> App {
        App::with_downloader(
            Config {
                mode,
                verbose: false,
            },
            Arc::new(FakeYtDlp),
        )
    }

    #[tokio::test]
    async fn scrape_applies_rules_and_tags_the_file() {
        let dir = TempDir::new().unwrap();
        let rules = dir.path().join("rules.json");
        std::fs::write(
            &rules,
            r#"{"album_source": "artist", "title_suffix": " (Audio)", "description_template": "{artist} - {title}"}"#,
        )
        .unwrap();
        let output_dir = dir.path().join("out");

        app(scrape(output_dir.clone(), Some(rules))).run().await.unwrap();

        let files: Vec<_> = std::fs::read_dir(&output_dir)
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(files, vec!["Song.mp3".to_string()]);

        let tag = id3::Tag::read_from_path(output_dir.join("Song.mp3")).unwrap();
        assert_eq!(tag.title(), Some("Song (Audio)"));
        assert_eq!(tag.artist(), Some("Artist"));
        assert_eq!(tag.album(), Some("Artist"));
        assert_eq!(
            tag.comments().next().map(|c| c.text.as_str()),
            Some("Artist - Song (Audio)")
        );
        assert!(tag.pictures().next().is_none());
    }

    #[tokio::test]
    async fn scrape_without_rules_falls_back_to_artist_album() {
        let dir = TempDir::new().unwrap();
        let output_dir = dir.path().join("out");

        app(scrape(output_dir.clone(), None)).run().await.unwrap();

        let tag = id3::Tag::read_from_path(output_dir.join("Song.mp3")).unwrap();
        assert_eq!(tag.title(), Some("Song"));
        assert_eq!(tag.album(), Some("Artist"));
    }

    #[tokio::test]
    async fn invalid_url_creates_nothing() {
        let dir = TempDir::new().unwrap();
        let output_dir = dir.path().join("out");

        let result = app(Mode::Scrape(ScrapeConfig {
            url: "https://example.com/watch?v=x".to_string(),
            output_dir: output_dir.clone(),
            interactive: false,
            rules: None,
        }))
        .run()
        .await;

        assert!(result.is_err());
        assert!(!output_dir.exists());
    }

    #[tokio::test]
    async fn save_rules_writes_loadable_template() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("rules.json");

        app(Mode::SaveRules(path.clone())).run().await.unwrap();

        assert_eq!(RulesConfig::from_file(&path).unwrap(), RulesConfig::template());
    }

    #[tokio::test]
    async fn broken_rules_fail_before_download() {
        let dir = TempDir::new().unwrap();
        let rules = dir.path().join("rules.json");
        std::fs::write(&rules, r#"{"auto_extract_year": 1}"#).unwrap();
        let output_dir = dir.path().join("out");

        let result = app(Mode::Scrape(ScrapeConfig {
            url: "https://youtu.be/x".to_string(),
            output_dir: output_dir.clone(),
            interactive: false,
            rules: Some(rules),
        }))
        .run()
        .await;

        let error = result.unwrap_err();
        assert!(error.to_string().contains("invalid rules file"), "{error}");
        assert!(!output_dir.exists(), "nothing should be created");
    }

    #[tokio::test]
    async fn missing_rules_file_fails_before_download() {
        let dir = TempDir::new().unwrap();
        let output_dir = dir.path().join("out");

        let result = app(Mode::Scrape(ScrapeConfig {
            url: "https://youtu.be/x".to_string(),
            output_dir: output_dir.clone(),
            interactive: false,
            rules: Some(PathBuf::from("/definitely/not/here/rules.json")),
        }))
        .run()
        .await;

        assert!(result.is_err());
        assert!(!output_dir.exists());
    }
}
