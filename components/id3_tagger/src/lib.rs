// components/id3_tagger/src/lib.rs
//! ID3 tagging for downloaded MP3s, including YouTube thumbnail cover art.
mod cover;
mod writer;

pub use cover::{thumbnail_urls, CoverArt, CoverArtFetcher, CoverError};
pub use writer::{write_tags, TagError, TagSummary};
