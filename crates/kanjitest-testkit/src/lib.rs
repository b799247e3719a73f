//! Test utilities for kanjitest
//!
//! This crate provides shared testing utilities used across the kanjitest workspace.

pub mod fixtures;
pub mod latex;

pub use fixtures::{create_test_project, vocabulary_table, write_templates, write_vocabulary};
#[cfg(unix)]
pub use latex::{recorded_calls, write_fake_latex};

use std::path::Path;
use std::sync::Mutex;
use tempfile::TempDir;

/// Environment variable naming the renderer binary
pub const LATEX_ENV: &str = "KANJITEST_LATEX";

/// Static mutex to serialize tests that modify environment variables
pub static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Creates a temporary directory within `.tmp/` at the current directory
///
/// All test temporary files are kept in a single gitignored location that
/// is easy to clean up manually if needed.
///
/// # Panics
///
/// Panics if the current directory cannot be determined or `.tmp/` or the
/// temporary subdirectory cannot be created.
///
/// # Examples
///
/// ```rust
/// use kanjitest_testkit::temp_dir_in_workspace;
///
/// let temp = temp_dir_in_workspace();
/// let file_path = temp.path().join("words.csv");
/// std::fs::write(&file_path, "jp;fr;en\n").unwrap();
/// // Cleanup happens automatically when temp is dropped
/// ```
pub fn temp_dir_in_workspace() -> TempDir {
    try_temp_dir_in_workspace().expect("Failed to create temporary directory in .tmp/")
}

/// Alternative with Result for non-test code
pub fn try_temp_dir_in_workspace() -> std::io::Result<TempDir> {
    let workspace_root = std::env::current_dir()?;
    let tmp_base = workspace_root.join(".tmp");
    std::fs::create_dir_all(&tmp_base)?;
    TempDir::new_in(&tmp_base)
}

/// Run a test with a controlled renderer environment
///
/// Sets `KANJITEST_LATEX` to `latex`, or removes it and points `PATH` at an
/// empty directory so no `pdflatex` can be found. The previous values are
/// restored afterwards. Tests using this helper are serialized through
/// [`ENV_LOCK`].
///
/// # Examples
///
/// ```no_run
/// use kanjitest_testkit::with_isolated_latex_env;
///
/// fn test_latex_not_found() {
///     with_isolated_latex_env(None, || {
///         // neither KANJITEST_LATEX nor PATH can supply pdflatex here
///     });
/// }
/// ```
pub fn with_isolated_latex_env<F, R>(latex: Option<&Path>, f: F) -> R
where
    F: FnOnce() -> R,
{
    let _guard = ENV_LOCK
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());

    let original_latex = std::env::var_os(LATEX_ENV);
    let original_path = std::env::var_os("PATH");
    let empty_path = TempDir::new().expect("Failed to create empty PATH directory");

    // SAFETY: We hold ENV_LOCK, ensuring no other test is modifying env vars concurrently.
    unsafe {
        match latex {
            Some(binary) => std::env::set_var(LATEX_ENV, binary),
            None => {
                std::env::remove_var(LATEX_ENV);
                std::env::set_var("PATH", empty_path.path());
            }
        }
    }

    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(f));

    // SAFETY: We still hold ENV_LOCK, ensuring exclusive access to env vars.
    unsafe {
        match original_latex {
            Some(value) => std::env::set_var(LATEX_ENV, value),
            None => std::env::remove_var(LATEX_ENV),
        }
        match original_path {
            Some(value) => std::env::set_var("PATH", value),
            None => std::env::remove_var("PATH"),
        }
    }

    match result {
        Ok(value) => value,
        Err(panic) => std::panic::resume_unwind(panic),
    }
}
