use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum KanjiError {
    // Config errors
    #[error(
        "CONFIG_ODD_CELL_COUNT: columns × rows must be even to split cells evenly, got {columns} × {rows} = {cells}"
    )]
    OddCellCount {
        columns: usize,
        rows: usize,
        cells: usize,
    },

    #[error("CONFIG_INVALID_VALUE: {field}: {reason}")]
    ConfigInvalidValue { field: String, reason: String },

    #[error("CONFIG_PARSE_ERROR: failed to parse '{path}': {reason}")]
    ConfigParseError { path: PathBuf, reason: String },

    // Data errors
    #[error("DATA_TABLE_MALFORMED: '{path}': {reason}")]
    TableMalformed { path: PathBuf, reason: String },

    #[error("DATA_NO_PLACEHOLDER_ROW: '{path}' has no row with fr = '?' marking the end of the translated entries")]
    NoPlaceholderRow { path: PathBuf },

    #[error(
        "DATA_INSUFFICIENT_ROWS: the grid needs {requested} entries but only {usable} usable entries are available (short by {})",
        .requested - .usable
    )]
    InsufficientRows { requested: usize, usable: usize },

    // Template errors
    #[error("TEMPLATE_INVALID: {0}")]
    Template(#[from] crate::template::TemplateError),

    // Render errors
    #[error(
        "RENDER_NOT_FOUND: renderer '{program}' could not be started; check the installation with 'pdflatex -v' (on Ubuntu: sudo apt-get install texlive-latex-base)"
    )]
    RendererNotFound { program: String },

    #[error(
        "RENDER_FAILED: rendering '{source_file}' exited with code {exit_code}; check the installation with 'pdflatex -v' (on Ubuntu: sudo apt-get install texlive-latex-base){}",
        format_detail(.detail)
    )]
    RenderFailed {
        source_file: PathBuf,
        exit_code: i32,
        detail: String,
    },

    // IO errors
    #[error("IO_ERROR: '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn format_detail(detail: &str) -> String {
    if detail.is_empty() {
        String::new()
    } else {
        format!("\n{}", detail)
    }
}

impl KanjiError {
    /// Wrap an IO error with the path it concerns
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        KanjiError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn invalid_value(field: impl Into<String>, reason: impl Into<String>) -> Self {
        KanjiError::ConfigInvalidValue {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// The pipeline stage this error belongs to
    pub fn stage(&self) -> Stage {
        match self {
            KanjiError::OddCellCount { .. }
            | KanjiError::ConfigInvalidValue { .. }
            | KanjiError::ConfigParseError { .. } => Stage::Config,
            KanjiError::TableMalformed { .. }
            | KanjiError::NoPlaceholderRow { .. }
            | KanjiError::InsufficientRows { .. } => Stage::Data,
            KanjiError::Template(_)
            | KanjiError::RendererNotFound { .. }
            | KanjiError::RenderFailed { .. } => Stage::Render,
            KanjiError::Io { .. } => Stage::Io,
        }
    }
}

/// Pipeline stage reported alongside a failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Config,
    Data,
    Render,
    Io,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Config => write!(f, "config validation"),
            Stage::Data => write!(f, "data loading"),
            Stage::Render => write!(f, "rendering"),
            Stage::Io => write!(f, "file access"),
        }
    }
}

pub type Result<T> = std::result::Result<T, KanjiError>;
