use crate::info::{LatexInfo, LatexSource};
use kanjitest_core::{KanjiError, Result};
use std::path::{Path, PathBuf};

/// Environment variable overriding the renderer binary
pub const LATEX_ENV: &str = "KANJITEST_LATEX";

/// Program looked up on PATH when nothing else is configured
pub const DEFAULT_PROGRAM: &str = "pdflatex";

/// Turn a configured program into an executable path
///
/// Anything with a directory component is taken as a path and must exist;
/// a bare name is looked up on PATH.
fn locate(program: &Path) -> Option<PathBuf> {
    let has_dir = program
        .parent()
        .is_some_and(|parent| !parent.as_os_str().is_empty());

    if has_dir {
        return program.is_file().then(|| program.to_path_buf());
    }

    which::which(program).ok()
}

fn not_found(program: &Path) -> KanjiError {
    KanjiError::RendererNotFound {
        program: program.display().to_string(),
    }
}

/// Resolve the pdflatex binary
///
/// An explicit program (from `--latex` or the config file) wins, then
/// `KANJITEST_LATEX`, then `pdflatex` on PATH. A configured program that
/// cannot be located is an error; there is no fallback past it.
///
/// # Errors
///
/// Returns `RendererNotFound` naming the program that could not be located.
pub fn resolve_latex(explicit: Option<&Path>) -> Result<LatexInfo> {
    if let Some(program) = explicit {
        let path = locate(program).ok_or_else(|| not_found(program))?;
        return Ok(LatexInfo {
            source: LatexSource::Explicit,
            path,
        });
    }

    if let Some(value) = std::env::var_os(LATEX_ENV).filter(|v| !v.is_empty()) {
        let program = PathBuf::from(value);
        let path = locate(&program).ok_or_else(|| not_found(&program))?;
        return Ok(LatexInfo {
            source: LatexSource::Env,
            path,
        });
    }

    let path = which::which(DEFAULT_PROGRAM).map_err(|_| not_found(Path::new(DEFAULT_PROGRAM)))?;
    Ok(LatexInfo {
        source: LatexSource::System,
        path,
    })
}
