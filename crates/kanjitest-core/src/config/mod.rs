//! Run configuration: validated worksheet options resolved from the command
//! line and an optional kanjitest.toml defaults file.

pub mod model;

pub use model::ConfigFile;

use crate::error::{KanjiError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

pub const DEFAULT_TITLE: &str = "Kanji test";
pub const DEFAULT_INSTRUCTIONS: &str = "Complete the table below.";
pub const DEFAULT_OUTPUT: &str = "output";
pub const DEFAULT_WORDS: &str = "words.csv";
pub const DEFAULT_TEMPLATES: &str = "model";

/// Seed value meaning "draw from OS entropy"
pub const NO_SEED: i64 = -1;

/// Font size budget shared by the cells of one row
const FONT_SIZE_BUDGET: usize = 200;

/// Translation language printed next to each kanji
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Fr,
    #[default]
    En,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::Fr, Language::En];

    /// Column name in the vocabulary table
    pub fn code(self) -> &'static str {
        match self {
            Language::Fr => "fr",
            Language::En => "en",
        }
    }

    pub fn default_subtitle(self) -> &'static str {
        match self {
            Language::Fr => r"Test de kanji \begin{CJK}{UTF8}{min}漢字検定\end{CJK}",
            Language::En => r"Kanji proficiency test \begin{CJK}{UTF8}{min}漢字検定\end{CJK}",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = KanjiError;

    fn from_str(s: &str) -> Result<Self> {
        Language::ALL
            .into_iter()
            .find(|lang| lang.code() == s)
            .ok_or_else(|| {
                KanjiError::invalid_value("language", format!("'{}' is not one of fr, en", s))
            })
    }
}

/// Worksheet grid dimensions
///
/// Construction guarantees both sides are positive and the cell count is
/// even, so the layout mask can always be split in two equal halves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    columns: usize,
    rows: usize,
    cells: usize,
}

impl Grid {
    pub fn new(columns: usize, rows: usize) -> Result<Self> {
        if columns == 0 {
            return Err(KanjiError::invalid_value("columns", "must be a positive integer"));
        }
        if rows == 0 {
            return Err(KanjiError::invalid_value("rows", "must be a positive integer"));
        }

        let cells = columns
            .checked_mul(rows)
            .ok_or_else(|| KanjiError::invalid_value("columns", "columns × rows overflows"))?;
        if cells % 2 != 0 {
            return Err(KanjiError::OddCellCount {
                columns,
                rows,
                cells,
            });
        }

        Ok(Self {
            columns,
            rows,
            cells,
        })
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cells(&self) -> usize {
        self.cells
    }

    /// Font size of the kanji, identical for every cell and both variants
    pub fn font_size(&self) -> usize {
        FONT_SIZE_BUDGET / self.columns
    }

    /// One point per cell
    pub fn points(&self) -> usize {
        self.cells()
    }
}

/// Convert the command-line seed into an optional RNG seed
pub fn parse_seed(seed: i64) -> Result<Option<u64>> {
    if seed == NO_SEED {
        return Ok(None);
    }
    u64::try_from(seed).map(Some).map_err(|_| {
        KanjiError::invalid_value(
            "seed",
            format!("{} is negative; use {} to disable seeding", seed, NO_SEED),
        )
    })
}

/// Unvalidated options, as collected from the command line
#[derive(Debug, Clone)]
pub struct GenerationOptions {
    pub language: Option<Language>,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub instructions: Option<String>,
    pub columns: usize,
    pub rows: usize,
    pub output: Option<PathBuf>,
    pub seed: i64,
    pub words: Option<PathBuf>,
    pub templates: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub latex: Option<PathBuf>,
    /// `Some` when the command line chose explicitly
    pub keep_source: Option<bool>,
}

impl GenerationOptions {
    pub fn new(columns: usize, rows: usize) -> Self {
        Self {
            language: None,
            title: None,
            subtitle: None,
            instructions: None,
            columns,
            rows,
            output: None,
            seed: NO_SEED,
            words: None,
            templates: None,
            config: None,
            latex: None,
            keep_source: None,
        }
    }

    /// Validate the options and merge them over the defaults file
    ///
    /// The grid is checked first so that an odd cell count is reported
    /// before any file is read.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - columns × rows is odd, or either side is zero
    /// - the seed is negative but not -1
    /// - the defaults file cannot be read or parsed
    pub fn resolve(self) -> Result<GenerationConfig> {
        let grid = Grid::new(self.columns, self.rows)?;
        let seed = parse_seed(self.seed)?;

        let file = match &self.config {
            Some(path) => ConfigFile::from_file(path)?,
            None => ConfigFile::default(),
        };

        let language = self
            .language
            .or(file.worksheet.language)
            .unwrap_or_default();

        Ok(GenerationConfig {
            language,
            title: self
                .title
                .or(file.worksheet.title)
                .unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            subtitle: self
                .subtitle
                .or(file.worksheet.subtitle)
                .unwrap_or_else(|| language.default_subtitle().to_string()),
            instructions: self
                .instructions
                .or(file.worksheet.instructions)
                .unwrap_or_else(|| DEFAULT_INSTRUCTIONS.to_string()),
            grid,
            output: self
                .output
                .or(file.paths.output)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
            seed,
            words: self
                .words
                .or(file.paths.words)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_WORDS)),
            templates: self
                .templates
                .or(file.paths.templates)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_TEMPLATES)),
            latex: self.latex.or(file.render.latex),
            keep_source: self
                .keep_source
                .or(file.render.keep_source)
                .unwrap_or(false),
        })
    }
}

/// Validated configuration for one run
///
/// Title, subtitle and instructions are inserted into the document verbatim;
/// they may carry LaTeX markup and are never escaped.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationConfig {
    pub language: Language,
    pub title: String,
    pub subtitle: String,
    pub instructions: String,
    pub grid: Grid,
    pub output: PathBuf,
    pub seed: Option<u64>,
    pub words: PathBuf,
    pub templates: PathBuf,
    pub latex: Option<PathBuf>,
    pub keep_source: bool,
}
