// components/metadata_rules/src/transform.rs
use crate::error::ConfigError;
use crate::record::MetadataRecord;
use crate::rules::{AlbumSource, RulesConfig};
use regex::Regex;
use std::sync::OnceLock;

/// Apply `rules` to `record`, returning the rewritten record.
///
/// Steps run in a fixed order: album, artist prefix, title suffix,
/// description template, year extraction. The template sees the results of
/// the first three steps and year extraction reads the rendered description.
/// On error `record` is left as it was.
pub fn apply(record: &MetadataRecord, rules: &RulesConfig) -> Result<MetadataRecord, ConfigError> {
    let template = rules.parsed_template()?;
    let mut out = record.clone();

    match &rules.album_source {
        Some(AlbumSource::UseArtist) => out.album = out.artist.clone(),
        Some(AlbumSource::UseTitle) => out.album = out.title.clone(),
        Some(AlbumSource::Custom(name)) => out.album = name.clone(),
        None => {}
    }

    out.artist.insert_str(0, &rules.artist_prefix);
    out.title.push_str(&rules.title_suffix);

    if let Some(template) = template {
        out.description = template.render(&out);
    }

    if rules.auto_extract_year && out.year.is_empty() {
        if let Some(year) = find_year(&out.description) {
            out.year = year.to_string();
        }
    }

    Ok(out)
}

/// First run of exactly four digits not touching other digits
fn find_year(text: &str) -> Option<&str> {
    static YEAR: OnceLock<Regex> = OnceLock::new();
    let pattern = YEAR.get_or_init(|| {
        Regex::new(r"(?:^|[^0-9])([0-9]{4})(?:[^0-9]|$)").expect("year pattern is valid")
    });

    pattern
        .captures(text)
        .and_then(|captures| captures.get(1))
        .map(|year| year.as_str())
}
