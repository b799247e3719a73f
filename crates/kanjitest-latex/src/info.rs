use std::fmt;
use std::path::PathBuf;

/// Where the renderer binary was found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LatexSource {
    Explicit,
    Env,
    System,
}

impl fmt::Display for LatexSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LatexSource::Explicit => write!(f, "explicit path"),
            LatexSource::Env => write!(f, "KANJITEST_LATEX"),
            LatexSource::System => write!(f, "system PATH"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LatexInfo {
    pub source: LatexSource,
    pub path: PathBuf,
}
