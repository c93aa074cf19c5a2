// components/metadata_rules/src/error.rs
use crate::record::Field;
use std::path::PathBuf;
use thiserror::Error;

/// A rules configuration that cannot be applied
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("description template references unknown field '{0}'")]
    UnknownTemplateField(String),

    #[error("description template has an unterminated '{{' at byte {0}")]
    UnterminatedPlaceholder(usize),

    #[error("description template has an unmatched '}}' at byte {0}")]
    UnmatchedBrace(usize),
}

#[derive(Debug, Error)]
pub enum RulesError {
    #[error("failed to read rules file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid rules file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid tagging rules: {0}")]
    Invalid(#[from] ConfigError),

    #[error("failed to write rules file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Error)]
pub enum EditError {
    #[error("input closed before a value for {0} was entered")]
    InputClosed(Field),

    #[error("failed to prompt for metadata: {0}")]
    Io(#[from] std::io::Error),
}

/// Failure while preparing a record for tagging
#[derive(Debug, Error)]
pub enum PrepareError {
    #[error("failed to apply tagging rules: {0}")]
    Rules(#[from] ConfigError),

    #[error(transparent)]
    Edit(#[from] EditError),
}
