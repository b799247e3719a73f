use crate::error::Result;
use crate::template::Template;
use std::path::Path;

pub const DOCUMENT_FILE: &str = "document.txt";
pub const CONTENT_FILE: &str = "content.txt";
pub const WORD_FILE: &str = "word.txt";

/// Tokens of the document shell
pub mod document {
    pub const TITLE: &str = "TITLE";
    pub const SUBTITLE: &str = "SUBTITLE";
    pub const INSTRUCTIONS: &str = "INSTRUCTIONS";
    pub const POINTS: &str = "POINTS";
    pub const CONTENT: &str = "CONTENT";
}

/// Tokens of the grid content
pub mod content {
    pub const COLS: &str = "COLS";
    pub const WORDS: &str = "WORDS";
}

/// Tokens of a single cell
pub mod word {
    pub const JP: &str = "JP";
    /// Translation in the configured language, whichever it is
    pub const FR: &str = "FR";
    pub const FONTSIZE: &str = "FONTSIZE";
    /// Color of the translation
    pub const COLTITLE: &str = "COLTITLE";
    /// Color of the kanji
    pub const COLUPPER: &str = "COLUPPER";
}

/// The three nested worksheet templates
#[derive(Debug, Clone)]
pub struct WorksheetTemplates {
    pub document: Template,
    pub content: Template,
    pub word: Template,
}

impl WorksheetTemplates {
    /// Read document.txt, content.txt and word.txt from `dir`
    pub fn load(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        Ok(Self {
            document: Template::from_file(dir.join(DOCUMENT_FILE))?,
            content: Template::from_file(dir.join(CONTENT_FILE))?,
            word: Template::from_file(dir.join(WORD_FILE))?,
        })
    }
}
