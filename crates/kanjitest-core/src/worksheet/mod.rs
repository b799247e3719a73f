//! Worksheet rendering: fills the cell, grid and document templates for the
//! test and solution variants.

pub mod templates;

pub use templates::WorksheetTemplates;

use crate::config::GenerationConfig;
use crate::error::Result;
use crate::layout::Layout;
use crate::template::TemplateValues;
use std::fmt;
use templates::{content, document, word};

/// Color of revealed content
pub const VISIBLE: &str = "black";
/// Color of hidden content: white on the white page
pub const HIDDEN: &str = "white";

const SOURCE_EXTENSION: &str = "tex";

/// Which of the two documents is being produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Worksheet handed to the student, half of each cell hidden
    Test,
    /// Answer key, every cell fully shown
    Solution,
}

impl Variant {
    /// Render order: a failure on the test sheet surfaces first
    pub const ALL: [Variant; 2] = [Variant::Test, Variant::Solution];

    pub fn file_stem(self) -> &'static str {
        match self {
            Variant::Test => "test",
            Variant::Solution => "solution",
        }
    }

    /// `test.tex` / `solution.tex`
    pub fn source_file_name(self) -> String {
        format!("{}.{}", self.file_stem(), SOURCE_EXTENSION)
    }

    /// Colors of the `@COLTITLE@` (translation) and `@COLUPPER@` (kanji)
    /// tokens for a cell
    ///
    /// In the test sheet a `true` mask bit shows the translation and hides
    /// the kanji, so the student writes the kanji; `false` is the reverse.
    pub fn cell_colors(self, mask_bit: bool) -> (&'static str, &'static str) {
        match (self, mask_bit) {
            (Variant::Solution, _) => (VISIBLE, VISIBLE),
            (Variant::Test, true) => (VISIBLE, HIDDEN),
            (Variant::Test, false) => (HIDDEN, VISIBLE),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_stem())
    }
}

/// Complete LaTeX source of one variant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument {
    pub variant: Variant,
    pub source: String,
}

impl RenderedDocument {
    pub fn file_name(&self) -> String {
        self.variant.source_file_name()
    }
}

/// Render one variant of the worksheet
pub fn render_document(
    templates: &WorksheetTemplates,
    config: &GenerationConfig,
    layout: &Layout,
    variant: Variant,
) -> Result<RenderedDocument> {
    let font_size = config.grid.font_size();

    let cells = layout
        .cells()
        .map(|(entry, mask_bit)| {
            let (title_color, upper_color) = variant.cell_colors(mask_bit);
            let values = TemplateValues::new()
                .with(word::JP, &entry.term)
                .with(word::FR, entry.translation(config.language))
                .with(word::FONTSIZE, font_size)
                .with(word::COLTITLE, title_color)
                .with(word::COLUPPER, upper_color);
            templates.word.render(&values)
        })
        .collect::<std::result::Result<Vec<_>, _>>()?;

    let grid = templates.content.render(
        &TemplateValues::new()
            .with(content::COLS, config.grid.columns())
            .with(content::WORDS, cells.join("\n")),
    )?;

    let source = templates.document.render(
        &TemplateValues::new()
            .with(document::CONTENT, grid)
            .with(document::TITLE, &config.title)
            .with(document::SUBTITLE, &config.subtitle)
            .with(document::INSTRUCTIONS, &config.instructions)
            .with(document::POINTS, config.grid.points()),
    )?;

    Ok(RenderedDocument { variant, source })
}

/// Render both variants in `Variant::ALL` order from the same layout
pub fn render_documents(
    templates: &WorksheetTemplates,
    config: &GenerationConfig,
    layout: &Layout,
) -> Result<Vec<RenderedDocument>> {
    Variant::ALL
        .into_iter()
        .map(|variant| render_document(templates, config, layout, variant))
        .collect()
}
