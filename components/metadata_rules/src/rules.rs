// components/metadata_rules/src/rules.rs
use crate::error::{ConfigError, RulesError};
use crate::template::Template;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Where the album name comes from when rules are applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlbumSource {
    UseArtist,
    UseTitle,
    Custom(String),
}

impl AlbumSource {
    const CUSTOM_PREFIX: &'static str = "custom:";

    /// Parse the rules-file notation: `artist`, `title` or `custom:<name>`.
    ///
    /// An empty value means "leave the album alone". Any other value is taken
    /// as a literal album name.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "" => None,
            "artist" => Some(AlbumSource::UseArtist),
            "title" => Some(AlbumSource::UseTitle),
            other => match other.strip_prefix(Self::CUSTOM_PREFIX) {
                Some(name) => Some(AlbumSource::Custom(name.to_string())),
                None => {
                    tracing::warn!(
                        album_source = other,
                        "unrecognized album_source, using it as a literal album name"
                    );
                    Some(AlbumSource::Custom(other.to_string()))
                }
            },
        }
    }
}

impl fmt::Display for AlbumSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlbumSource::UseArtist => f.write_str("artist"),
            AlbumSource::UseTitle => f.write_str("title"),
            AlbumSource::Custom(name) => write!(f, "{}{}", Self::CUSTOM_PREFIX, name),
        }
    }
}

mod album_source_serde {
    use super::AlbumSource;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<AlbumSource>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(source) => serializer.collect_str(source),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<AlbumSource>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().and_then(AlbumSource::parse))
    }
}

/// Automatic metadata rewriting rules, loaded from a JSON file.
///
/// Missing keys take their defaults and unknown keys are ignored, so older
/// and newer rule files both load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    #[serde(with = "album_source_serde")]
    pub album_source: Option<AlbumSource>,
    pub artist_prefix: String,
    pub title_suffix: String,
    /// Empty leaves the description untouched
    pub description_template: String,
    pub auto_extract_year: bool,
}

impl RulesConfig {
    /// The hand-editable starting point written by `--save-rules`
    pub fn template() -> Self {
        Self {
            album_source: Some(AlbumSource::UseArtist),
            artist_prefix: String::new(),
            title_suffix: String::new(),
            description_template: "{artist} - {title}".to_string(),
            auto_extract_year: false,
        }
    }

    /// Parsed description template, `None` when the description is left alone
    pub fn parsed_template(&self) -> Result<Option<Template>, ConfigError> {
        if self.description_template.is_empty() {
            return Ok(None);
        }
        Template::parse(&self.description_template).map(Some)
    }

    /// Load and validate rules from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, RulesError> {
        let path = path.as_ref();

        let json = std::fs::read_to_string(path).map_err(|source| RulesError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let rules: RulesConfig = serde_json::from_str(&json).map_err(|source| RulesError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        rules.parsed_template()?;

        tracing::debug!(path = %path.display(), ?rules, "loaded tagging rules");
        Ok(rules)
    }

    /// Write [`RulesConfig::template`] as pretty-printed JSON, replacing any existing file
    pub fn write_template(path: impl AsRef<Path>) -> Result<(), RulesError> {
        let path = path.as_ref();
        let write_error = |source| RulesError::Write {
            path: path.to_path_buf(),
            source,
        };

        let mut json = serde_json::to_string_pretty(&Self::template())
            .map_err(|e| write_error(std::io::Error::from(e)))?;
        json.push('\n');

        std::fs::write(path, json).map_err(write_error)?;

        tracing::info!(path = %path.display(), "Template rules file created");
        Ok(())
    }
}
