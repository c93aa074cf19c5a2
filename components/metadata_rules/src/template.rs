// components/metadata_rules/src/template.rs
use crate::error::ConfigError;
use crate::record::{Field, MetadataRecord};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Placeholder(Field),
}

/// A parsed description template such as `"{artist} - {title}"`.
///
/// Placeholders name a template field (see [`Field::TEMPLATE`]); `{{` and
/// `}}` produce literal braces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    pub fn parse(source: &str) -> Result<Self, ConfigError> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = source.char_indices().peekable();

        while let Some((pos, c)) = chars.next() {
            match c {
                '{' if matches!(chars.peek(), Some((_, '{'))) => {
                    chars.next();
                    literal.push('{');
                }
                '}' if matches!(chars.peek(), Some((_, '}'))) => {
                    chars.next();
                    literal.push('}');
                }
                '{' => {
                    let start = pos + 1;
                    let end = source[start..]
                        .find('}')
                        .map(|offset| start + offset)
                        .ok_or(ConfigError::UnterminatedPlaceholder(pos))?;
                    let name = &source[start..end];
                    let field = Field::template_field(name)
                        .ok_or_else(|| ConfigError::UnknownTemplateField(name.to_string()))?;

                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Placeholder(field));

                    for (i, _) in chars.by_ref() {
                        if i == end {
                            break;
                        }
                    }
                }
                '}' => return Err(ConfigError::UnmatchedBrace(pos)),
                _ => literal.push(c),
            }
        }

        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self { segments })
    }

    pub fn render(&self, record: &MetadataRecord) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Placeholder(field) => out.push_str(record.get(*field)),
            }
        }
        out
    }
}
