//! Vocabulary table loading
//!
//! The table is semicolon-delimited with a header row naming at least the
//! `jp`, `fr` and `en` columns. Rows are translated in order; the first row
//! whose `fr` field is `?` marks where translation stopped. Only the prefix
//! before it, cut down to whole batches, is eligible for sampling.

use crate::config::Language;
use crate::error::{KanjiError, Result};
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

/// Marks a row that has not been translated yet
pub const PLACEHOLDER: &str = "?";

/// Rows are added to the table in batches of this size
pub const BATCH_SIZE: usize = 5;

const DELIMITER: u8 = b';';

/// One row of the vocabulary table
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VocabularyEntry {
    /// Source term in Japanese
    #[serde(rename = "jp")]
    pub term: String,
    pub fr: String,
    pub en: String,
}

impl VocabularyEntry {
    pub fn new(term: impl Into<String>, fr: impl Into<String>, en: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            fr: fr.into(),
            en: en.into(),
        }
    }

    pub fn translation(&self, language: Language) -> &str {
        match language {
            Language::Fr => &self.fr,
            Language::En => &self.en,
        }
    }

    fn is_placeholder(&self) -> bool {
        self.fr == PLACEHOLDER
    }
}

/// Length of the sampling pool given the index of the first placeholder row
///
/// `floor((first_placeholder - 1) / BATCH_SIZE) * BATCH_SIZE`, clamped at zero.
pub fn usable_prefix_len(first_placeholder: usize) -> usize {
    first_placeholder.saturating_sub(1) / BATCH_SIZE * BATCH_SIZE
}

/// Ordered vocabulary table with its usable prefix
#[derive(Debug, Clone)]
pub struct Vocabulary {
    entries: Vec<VocabularyEntry>,
    usable: usize,
}

impl Vocabulary {
    /// Load the table from a file
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be opened
    /// - A record is malformed or a required column is missing
    /// - No row carries the `?` placeholder
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|e| KanjiError::io(path, e))?;
        Self::from_reader(file, path)
    }

    /// Load the table from any reader; `origin` names it in errors
    pub fn from_reader<R: Read>(reader: R, origin: &Path) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(DELIMITER)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let entries = reader
            .deserialize::<VocabularyEntry>()
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| KanjiError::TableMalformed {
                path: origin.to_path_buf(),
                reason: e.to_string(),
            })?;

        Self::from_entries(entries, origin)
    }

    /// Build from already parsed rows
    pub fn from_entries(entries: Vec<VocabularyEntry>, origin: &Path) -> Result<Self> {
        let first_placeholder = entries
            .iter()
            .position(VocabularyEntry::is_placeholder)
            .ok_or_else(|| KanjiError::NoPlaceholderRow {
                path: origin.to_path_buf(),
            })?;

        let usable = usable_prefix_len(first_placeholder);

        log::debug!(
            "Loaded {} rows from '{}': first placeholder at {}, {} usable",
            entries.len(),
            origin.display(),
            first_placeholder,
            usable
        );

        Ok(Self { entries, usable })
    }

    /// Every row, including untranslated ones
    #[cfg(test)]
    pub(crate) fn entries(&self) -> &[VocabularyEntry] {
        &self.entries
    }

    /// Rows eligible for sampling
    pub fn usable(&self) -> &[VocabularyEntry] {
        &self.entries[..self.usable]
    }

    #[cfg(test)]
    pub(crate) fn usable_len(&self) -> usize {
        self.usable
    }

    /// Fail unless the usable prefix can fill `cells` grid cells
    pub fn ensure_capacity(&self, cells: usize) -> Result<()> {
        if self.usable < cells {
            return Err(KanjiError::InsufficientRows {
                requested: cells,
                usable: self.usable,
            });
        }
        Ok(())
    }
}
