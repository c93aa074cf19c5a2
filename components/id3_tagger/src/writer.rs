// components/id3_tagger/src/writer.rs
use crate::cover::CoverArt;
use id3::frame::{Comment, Content, ExtendedText, Picture, PictureType};
use id3::{Frame, Tag, TagLike, Version};
use metadata_rules::MetadataRecord;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TagError {
    #[error("audio file not found: {}", .0.display())]
    MissingFile(PathBuf),

    #[error("failed to write ID3 tags to {}: {source}", path.display())]
    Id3 {
        path: PathBuf,
        #[source]
        source: id3::Error,
    },
}

/// What ended up in the tag, for the log line after writing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagSummary {
    pub title: String,
    pub artist: String,
    pub album: String,
    pub year: Option<String>,
    pub view_count: Option<String>,
    pub duration: Option<String>,
    pub has_url: bool,
    pub has_description: bool,
    pub has_cover: bool,
}

impl fmt::Display for TagSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Title='{}', Artist='{}'", self.title, self.artist)?;
        if !self.album.is_empty() {
            write!(f, ", Album='{}'", self.album)?;
        }
        if let Some(year) = &self.year {
            write!(f, ", Year='{}'", year)?;
        }
        if let Some(views) = &self.view_count {
            write!(f, ", Views={}", group_thousands(views))?;
        }
        if let Some(duration) = &self.duration {
            write!(f, ", Duration='{}'", duration)?;
        }
        if self.has_url {
            f.write_str(", URL: Added")?;
        }
        if self.has_description {
            f.write_str(", Description: Added")?;
        }
        if self.has_cover {
            f.write_str(", Cover: Yes")?;
        }
        Ok(())
    }
}

fn non_empty(value: &str) -> Option<&str> {
    (!value.is_empty()).then_some(value)
}

/// Replace the file's ID3 tag with one built from `record`.
///
/// Writes ID3v2.3 for the widest player support. Empty fields are left out;
/// an empty album is written as the artist.
pub fn write_tags(
    path: &Path,
    record: &MetadataRecord,
    cover: Option<&CoverArt>,
) -> Result<TagSummary, TagError> {
    if !path.is_file() {
        return Err(TagError::MissingFile(path.to_path_buf()));
    }
    let id3_error = |source| TagError::Id3 {
        path: path.to_path_buf(),
        source,
    };

    Tag::remove_from_path(path).map_err(id3_error)?;

    let mut tag = Tag::new();
    let album = non_empty(&record.album).unwrap_or(&record.artist);

    if let Some(title) = non_empty(&record.title) {
        tag.set_title(title);
    }
    if let Some(artist) = non_empty(&record.artist) {
        tag.set_artist(artist);
    }
    if let Some(album) = non_empty(album) {
        tag.set_album(album);
    }
    if let Some(year) = non_empty(&record.year) {
        tag.set_text("TYER", year);
    }
    if let Some(description) = non_empty(&record.description) {
        tag.add_frame(Comment {
            lang: "eng".to_string(),
            description: String::new(),
            text: description.to_string(),
        });
    }
    if let Some(url) = non_empty(record.video_url()) {
        tag.add_frame(Frame::with_content("WOAR", Content::Link(url.to_string())));
    }
    if let Some(views) = non_empty(&record.view_count) {
        tag.add_frame(ExtendedText {
            description: "View Count".to_string(),
            value: views.to_string(),
        });
    }
    if let Some(duration) = non_empty(&record.duration) {
        tag.add_frame(ExtendedText {
            description: "Duration".to_string(),
            value: duration.to_string(),
        });
    }
    if let Some(cover) = cover {
        tag.add_frame(Picture {
            mime_type: cover.mime_type.to_string(),
            picture_type: PictureType::CoverFront,
            description: String::new(),
            data: cover.data.clone(),
        });
    }

    tag.write_to_path(path, Version::Id3v23).map_err(id3_error)?;

    Ok(TagSummary {
        title: record.title.clone(),
        artist: record.artist.clone(),
        album: album.to_string(),
        year: non_empty(&record.year).map(str::to_string),
        view_count: non_empty(&record.view_count).map(str::to_string),
        duration: non_empty(&record.duration).map(str::to_string),
        has_url: !record.video_url().is_empty(),
        has_description: !record.description.is_empty(),
        has_cover: cover.is_some(),
    })
}

/// `1234567` -> `1,234,567`; non-numeric text is returned as is
fn group_thousands(digits: &str) -> String {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return digits.to_string();
    }

    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
