// components/metadata_rules/src/editor.rs
use crate::error::EditError;
use crate::record::{Field, MetadataRecord};
use std::io::{BufRead, Write};

const RULE_WIDTH: usize = 60;
const DISPLAY_LIMIT: usize = 60;

/// Operator answers, one per editable field. `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditOverrides {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub album: Option<String>,
    pub year: Option<String>,
    pub description: Option<String>,
}

impl EditOverrides {
    fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Title => self.title.as_deref(),
            Field::Artist => self.artist.as_deref(),
            Field::Album => self.album.as_deref(),
            Field::Year => self.year.as_deref(),
            Field::Description => self.description.as_deref(),
            _ => None,
        }
    }

    fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Title => &mut self.title,
            Field::Artist => &mut self.artist,
            Field::Album => &mut self.album,
            Field::Year => &mut self.year,
            Field::Description => &mut self.description,
            _ => return,
        };
        *slot = Some(value);
    }
}

/// Merge operator answers into `record`.
///
/// Fields are taken in prompt order. An unanswered album that is still empty
/// falls back to the artist as it stands after the title and artist answers.
pub fn merge(record: &MetadataRecord, overrides: &EditOverrides) -> MetadataRecord {
    let mut out = record.clone();

    if let Some(title) = &overrides.title {
        out.title = title.clone();
    }
    if let Some(artist) = &overrides.artist {
        out.artist = artist.clone();
    }
    match &overrides.album {
        Some(album) => out.album = album.clone(),
        None if out.album.is_empty() => out.album = out.artist.clone(),
        None => {}
    }
    if let Some(year) = &overrides.year {
        out.year = year.clone();
    }
    if let Some(description) = &overrides.description {
        out.description = description.clone();
    }

    out
}

/// A stage that lets someone review a record before it is tagged
pub trait MetadataEditor {
    fn edit(&mut self, record: &MetadataRecord) -> Result<MetadataRecord, EditError>;
}

/// Line-based prompt over any reader/writer pair (stdin/stdout in the CLI)
pub struct InteractiveEditor<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> InteractiveEditor<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn ask(
        &mut self,
        field: Field,
        record: &MetadataRecord,
        overrides: &EditOverrides,
    ) -> Result<Option<String>, EditError> {
        let current = overrides.get(field).unwrap_or_else(|| record.get(field));
        let label = match field {
            Field::Title => "Title".to_string(),
            Field::Artist => "Artist/Uploader".to_string(),
            Field::Album => {
                let artist = overrides.artist.as_deref().unwrap_or(&record.artist);
                format!("Album (leave blank to use Artist: {})", display_value(artist))
            }
            Field::Year => "Year".to_string(),
            _ => "Description".to_string(),
        };

        write!(
            self.output,
            "{}\n  Current: {}\n  New value: ",
            label,
            display_value(current)
        )?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(EditError::InputClosed(field));
        }

        let answer = line
            .strip_suffix('\n')
            .map(|l| l.strip_suffix('\r').unwrap_or(l))
            .unwrap_or(&line);

        Ok((!answer.is_empty()).then(|| answer.to_string()))
    }
}

impl<R: BufRead, W: Write> MetadataEditor for InteractiveEditor<R, W> {
    fn edit(&mut self, record: &MetadataRecord) -> Result<MetadataRecord, EditError> {
        let rule = "=".repeat(RULE_WIDTH);
        writeln!(self.output, "\n{rule}")?;
        writeln!(self.output, "METADATA EDITOR - Press Enter to keep a field")?;
        writeln!(self.output, "{rule}")?;

        let mut overrides = EditOverrides::default();
        for field in Field::EDITABLE {
            if let Some(answer) = self.ask(field, record, &overrides)? {
                overrides.set(field, answer);
            }
        }

        writeln!(self.output, "{rule}\n")?;
        self.output.flush()?;

        Ok(merge(record, &overrides))
    }
}

/// Shorten long values for the prompt; the record keeps the full text
fn display_value(value: &str) -> String {
    if value.is_empty() {
        return "(not set)".to_string();
    }
    if value.chars().count() > DISPLAY_LIMIT {
        let head: String = value.chars().take(DISPLAY_LIMIT - 3).collect();
        return format!("{head}...");
    }
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::io::Cursor;

    fn record() -> MetadataRecord {
        let mut record = MetadataRecord::new("x", "https://y/x");
        record.title = "T".to_string();
        record.artist = "A".to_string();
        record.description = "Some notes".to_string();
        record.duration = "3:32".to_string();
        record.view_count = "100".to_string();
        record
    }

    fn run_editor(
        record: &MetadataRecord,
        input: &str,
    ) -> (Result<MetadataRecord, EditError>, String) {
        let mut output = Vec::new();
        let result =
            InteractiveEditor::new(Cursor::new(input.as_bytes()), &mut output).edit(record);
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn merge_without_answers_only_fills_empty_album() {
        let record = record();

        let out = merge(&record, &EditOverrides::default());

        let mut expected = record.clone();
        expected.album = "A".to_string();
        assert_eq!(out, expected);
    }

    #[test]
    fn merge_without_answers_keeps_existing_album() {
        let mut record = record();
        record.album = "Greatest Hits".to_string();

        assert_eq!(merge(&record, &EditOverrides::default()), record);
    }

    #[test]
    fn album_falls_back_to_the_edited_artist() {
        let overrides = EditOverrides {
            artist: Some("New Artist".to_string()),
            ..EditOverrides::default()
        };

        let out = merge(&record(), &overrides);

        assert_eq!(out.artist, "New Artist");
        assert_eq!(out.album, "New Artist");
    }

    #[test]
    fn answers_replace_values_verbatim() {
        let overrides = EditOverrides {
            title: Some("  Spaced Title ".to_string()),
            album: Some("LP".to_string()),
            year: Some("1987".to_string()),
            description: Some("new".to_string()),
            ..EditOverrides::default()
        };

        let out = merge(&record(), &overrides);

        assert_eq!(out.title, "  Spaced Title ");
        assert_eq!(out.artist, "A");
        assert_eq!(out.album, "LP");
        assert_eq!(out.year, "1987");
        assert_eq!(out.description, "new");
        assert_eq!(out.duration, "3:32");
        assert_eq!(out.view_count, "100");
    }

    #[test]
    fn enter_everywhere_keeps_record() {
        let (result, _) = run_editor(&record(), "\n\n\n\n\n");

        let mut expected = record();
        expected.album = "A".to_string();
        assert_eq!(result.unwrap(), expected);
    }

    #[test]
    fn prompts_in_order_and_applies_answers() {
        let (result, output) = run_editor(&record(), "New Title\nB\n\n2001\r\n\n");

        let out = result.unwrap();
        assert_eq!(out.title, "New Title");
        assert_eq!(out.artist, "B");
        assert_eq!(out.album, "B");
        assert_eq!(out.year, "2001");
        assert_eq!(out.description, "Some notes");

        let title_at = output.find("Title\n").unwrap();
        let artist_at = output.find("Artist/Uploader").unwrap();
        let album_at = output.find("Album (leave blank to use Artist: B)").unwrap();
        let year_at = output.find("Year\n").unwrap();
        let description_at = output.find("Description\n").unwrap();
        assert!(title_at < artist_at && artist_at < album_at);
        assert!(album_at < year_at && year_at < description_at);
        assert!(output.contains("Current: (not set)"));
    }

    #[test]
    fn long_values_are_truncated_for_display_only() {
        let mut record = record();
        record.description = "x".repeat(100);

        let (result, output) = run_editor(&record, "\n\n\n\n\n");

        assert!(output.contains(&format!("Current: {}...", "x".repeat(57))));
        assert!(!output.contains(&"x".repeat(58)));
        assert_eq!(result.unwrap().description, "x".repeat(100));
    }

    #[test]
    fn closed_input_aborts_the_edit() {
        let record = record();

        let (result, _) = run_editor(&record, "Only a title\n");

        assert_matches!(result, Err(EditError::InputClosed(Field::Artist)));
        assert_eq!(record.title, "T");
    }

    #[test]
    fn display_value_cases() {
        assert_eq!(display_value(""), "(not set)");
        assert_eq!(display_value("short"), "short");
        assert_eq!(display_value(&"é".repeat(60)), "é".repeat(60));
        assert_eq!(display_value(&"é".repeat(61)), format!("{}...", "é".repeat(57)));
    }
}
