// components/metadata_rules/src/lib.rs
//! Metadata transformation for scraped tracks.
//!
//! A [`MetadataRecord`] is built once per video, optionally rewritten by a
//! [`RulesConfig`] and then reviewed by the operator before it is handed to
//! the tag writer. See [`pipeline::prepare`] for the fixed stage order.
mod editor;
mod error;
pub mod pipeline;
mod record;
mod rules;
mod template;
mod transform;

pub use editor::{merge, EditOverrides, InteractiveEditor, MetadataEditor};
pub use error::{ConfigError, EditError, PrepareError, RulesError};
pub use record::{Field, MetadataRecord};
pub use rules::{AlbumSource, RulesConfig};
pub use template::Template;
pub use transform::apply;
