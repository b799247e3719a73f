use crate::exec::{ExecOptions, exec_latex};
use crate::resolve::resolve_latex;
use kanjitest_core::{KanjiError, Renderer, Result};
use std::path::{Path, PathBuf};

/// Lines of renderer output kept in a failure report
const DETAIL_LINES: usize = 20;

/// Extensions pdflatex leaves next to the source
const BYPRODUCT_EXTENSIONS: [&str; 2] = ["aux", "log"];

/// pdflatex-backed [`Renderer`]
///
/// The binary is resolved on first use, so sources can be written before a
/// missing installation is reported.
#[derive(Debug, Clone, Default)]
pub struct PdfLatex {
    program: Option<PathBuf>,
}

impl PdfLatex {
    pub fn new(program: Option<PathBuf>) -> Self {
        Self { program }
    }

    fn args(file_name: &str) -> Vec<String> {
        vec![
            "-interaction=nonstopmode".to_string(),
            "-halt-on-error".to_string(),
            file_name.to_string(),
        ]
    }
}

/// Last lines of the captured output, stdout first
fn failure_detail(stdout: &str, stderr: &str) -> String {
    let lines: Vec<&str> = stdout
        .lines()
        .chain(stderr.lines())
        .filter(|line| !line.trim().is_empty())
        .collect();
    let start = lines.len().saturating_sub(DETAIL_LINES);
    lines[start..].join("\n")
}

impl Renderer for PdfLatex {
    fn name(&self) -> &str {
        "pdflatex"
    }

    fn render(&self, source: &Path) -> Result<PathBuf> {
        let info = resolve_latex(self.program.as_deref())?;
        log::debug!("Using {} from {}", info.path.display(), info.source);

        let file_name = source
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or_else(|| {
                KanjiError::invalid_value("source", format!("'{}' has no file name", source.display()))
            })?;
        let working_dir = match source.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        let result = exec_latex(ExecOptions {
            program: info.path,
            args: Self::args(&file_name),
            working_dir,
        })?;
        log::debug!("pdflatex finished in {}ms", result.duration_ms);

        if !result.success() {
            return Err(KanjiError::RenderFailed {
                source_file: source.to_path_buf(),
                exit_code: result.exit_code,
                detail: failure_detail(&result.stdout, &result.stderr),
            });
        }

        let artifact = source.with_extension("pdf");
        if !artifact.exists() {
            return Err(KanjiError::RenderFailed {
                source_file: source.to_path_buf(),
                exit_code: result.exit_code,
                detail: format!("no PDF was produced at '{}'", artifact.display()),
            });
        }

        Ok(artifact)
    }

    fn byproducts(&self, source: &Path) -> Vec<PathBuf> {
        BYPRODUCT_EXTENSIONS
            .iter()
            .map(|ext| source.with_extension(ext))
            .collect()
    }
}
