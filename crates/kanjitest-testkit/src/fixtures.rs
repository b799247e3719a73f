//! Fixture files for worksheet tests
//!
//! The templates here use every token the worksheet renderer supplies, in a
//! plain-text layout that is easy to assert on.

use std::fs;
use std::path::Path;

/// Document shell fixture
pub const DOCUMENT_TEMPLATE: &str = "\
% title: @TITLE@
% subtitle: @SUBTITLE@
% instructions: @INSTRUCTIONS@
% points: @POINTS@
@CONTENT@
% end
";

/// Grid content fixture
pub const CONTENT_TEMPLATE: &str = "\
% grid of @COLS@ columns
@WORDS@
";

/// Single cell fixture
pub const WORD_TEMPLATE: &str = "cell[size=@FONTSIZE@] translation(@COLTITLE@)=@FR@ kanji(@COLUPPER@)=@JP@";

/// Build a vocabulary table
///
/// The first `translated` rows are complete; the remaining rows up to
/// `total` carry the `?` placeholder in every translation column.
pub fn vocabulary_table(translated: usize, total: usize) -> String {
    let mut table = String::from("jp;fr;en\n");
    for i in 0..total {
        if i < translated {
            table.push_str(&format!("漢{i};mot{i};word{i}\n"));
        } else {
            table.push_str(&format!("漢{i};?;?\n"));
        }
    }
    table
}

/// Write a vocabulary table to `path`
///
/// # Panics
///
/// Panics if the file cannot be written
pub fn write_vocabulary(path: &Path, translated: usize, total: usize) {
    fs::write(path, vocabulary_table(translated, total)).expect("Failed to write vocabulary table");
}

/// Write the three fixture templates into `dir`, creating it if needed
///
/// # Panics
///
/// Panics if the directory or a file cannot be written
pub fn write_templates(dir: &Path) {
    fs::create_dir_all(dir).expect("Failed to create template directory");
    fs::write(dir.join("document.txt"), DOCUMENT_TEMPLATE).expect("Failed to write document.txt");
    fs::write(dir.join("content.txt"), CONTENT_TEMPLATE).expect("Failed to write content.txt");
    fs::write(dir.join("word.txt"), WORD_TEMPLATE).expect("Failed to write word.txt");
}

/// Lay out `words.csv` and `model/` in `root`, matching the default paths
pub fn create_test_project(root: &Path, translated: usize, total: usize) {
    write_vocabulary(&root.join("words.csv"), translated, total);
    write_templates(&root.join("model"));
}
