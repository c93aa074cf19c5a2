// components/metadata_rules/src/pipeline.rs
//! Stage ordering between fetching a record and tagging the file.
use crate::editor::MetadataEditor;
use crate::error::PrepareError;
use crate::record::MetadataRecord;
use crate::rules::RulesConfig;
use crate::transform;

/// Run the optional stages over a freshly fetched record.
///
/// Rules are applied before the editor so the operator reviews, and can
/// override, the transformed values.
pub fn prepare(
    record: MetadataRecord,
    rules: Option<&RulesConfig>,
    editor: Option<&mut dyn MetadataEditor>,
) -> Result<MetadataRecord, PrepareError> {
    let record = match rules {
        Some(rules) => {
            tracing::info!("Applying custom tagging rules");
            transform::apply(&record, rules)?
        }
        None => record,
    };

    let record = match editor {
        Some(editor) => editor.edit(&record)?,
        None => record,
    };

    tracing::debug!(?record, "metadata ready for tagging");
    Ok(record)
}
