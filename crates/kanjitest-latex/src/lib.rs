//! pdflatex resolution and execution for kanjitest.
//!
//! This crate locates a pdflatex binary and runs it over the generated
//! worksheet sources through the [`kanjitest_core::Renderer`] trait.
//!
//! # Architecture
//!
//! - [`info`]: where a binary was found
//! - [`resolve`]: binary resolution
//! - [`exec`]: process execution with output capture
//! - [`renderer`]: the [`PdfLatex`] renderer
//!
//! # Binary Resolution Flow
//!
//! ```text
//! resolve_latex(explicit)
//!     ↓
//! 1. Explicit program (--latex or [render].latex)
//!     → path: must exist
//!     → bare name: which::which(name)
//!     ↓ (not configured)
//! 2. KANJITEST_LATEX environment variable
//!     ↓ (unset or empty)
//! 3. System PATH
//!     → which::which("pdflatex")
//!     ↓ (not found)
//! 4. RENDER_NOT_FOUND
//! ```
//!
//! # Example
//!
//! ```no_run
//! use kanjitest_core::Renderer;
//! use kanjitest_latex::PdfLatex;
//! use std::path::Path;
//!
//! # fn main() -> kanjitest_core::Result<()> {
//! let renderer = PdfLatex::new(None);
//! let pdf = renderer.render(Path::new("output/test.tex"))?;
//! println!("Wrote {}", pdf.display());
//! # Ok(())
//! # }
//! ```

pub mod exec;
pub mod info;
pub mod renderer;
pub mod resolve;

pub use exec::{ExecOptions, ExecResult, exec_latex};
pub use info::{LatexInfo, LatexSource};
pub use renderer::PdfLatex;
pub use resolve::{DEFAULT_PROGRAM, LATEX_ENV, resolve_latex};
