// components/metadata_rules/src/record.rs
use std::fmt;

/// Named fields of a [`MetadataRecord`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Title,
    Artist,
    Album,
    Year,
    Description,
    Duration,
    ViewCount,
    VideoId,
    VideoUrl,
}

impl Field {
    /// Fields a description template may reference
    pub const TEMPLATE: [Field; 8] = [
        Field::Title,
        Field::Artist,
        Field::Album,
        Field::Year,
        Field::Duration,
        Field::ViewCount,
        Field::VideoId,
        Field::VideoUrl,
    ];

    /// Fields the operator may change, in prompt order
    pub const EDITABLE: [Field; 5] = [
        Field::Title,
        Field::Artist,
        Field::Album,
        Field::Year,
        Field::Description,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Artist => "artist",
            Field::Album => "album",
            Field::Year => "year",
            Field::Description => "description",
            Field::Duration => "duration",
            Field::ViewCount => "view_count",
            Field::VideoId => "video_id",
            Field::VideoUrl => "video_url",
        }
    }

    /// Look up a field a template is allowed to reference
    pub fn template_field(name: &str) -> Option<Field> {
        Self::TEMPLATE.into_iter().find(|field| field.as_str() == name)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metadata for one video on its way to the ID3 tag.
///
/// Every field is always present; an empty string means "unknown". The
/// provenance fields (`video_id`, `video_url`) are fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataRecord {
    pub title: String,
    pub artist: String,
    pub album: String,
    pub year: String,
    pub description: String,
    /// `M:SS`, or `H:MM:SS` from one hour up
    pub duration: String,
    /// Decimal digits
    pub view_count: String,
    video_id: String,
    video_url: String,
}

impl MetadataRecord {
    pub fn new(video_id: impl Into<String>, video_url: impl Into<String>) -> Self {
        Self {
            title: String::new(),
            artist: String::new(),
            album: String::new(),
            year: String::new(),
            description: String::new(),
            duration: String::new(),
            view_count: String::new(),
            video_id: video_id.into(),
            video_url: video_url.into(),
        }
    }

    pub fn video_id(&self) -> &str {
        &self.video_id
    }

    pub fn video_url(&self) -> &str {
        &self.video_url
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Title => &self.title,
            Field::Artist => &self.artist,
            Field::Album => &self.album,
            Field::Year => &self.year,
            Field::Description => &self.description,
            Field::Duration => &self.duration,
            Field::ViewCount => &self.view_count,
            Field::VideoId => &self.video_id,
            Field::VideoUrl => &self.video_url,
        }
    }
}
