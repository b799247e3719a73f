use crate::config::Language;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// kanjitest.toml schema: defaults shared by every worksheet run
///
/// Every field is optional; command-line flags take precedence.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub worksheet: WorksheetSection,
    #[serde(default)]
    pub paths: PathsSection,
    #[serde(default)]
    pub render: RenderSection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct WorksheetSection {
    #[serde(default)]
    pub language: Option<Language>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub instructions: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct PathsSection {
    /// Vocabulary table
    #[serde(default)]
    pub words: Option<PathBuf>,
    /// Directory holding document.txt, content.txt and word.txt
    #[serde(default)]
    pub templates: Option<PathBuf>,
    #[serde(default)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RenderSection {
    /// Renderer binary, either a path or a program name looked up on PATH
    #[serde(default)]
    pub latex: Option<PathBuf>,
    #[serde(default)]
    pub keep_source: Option<bool>,
}

impl ConfigFile {
    /// Read a kanjitest.toml file
    pub fn from_file(path: impl AsRef<Path>) -> crate::error::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| crate::error::KanjiError::io(path, e))?;

        toml::from_str(&content).map_err(|e| crate::error::KanjiError::ConfigParseError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }
}
