//! End-to-end worksheet generation

use crate::config::GenerationConfig;
use crate::error::{KanjiError, Result};
use crate::layout::sample_layout;
use crate::render::Renderer;
use crate::vocab::Vocabulary;
use crate::worksheet::{render_documents, RenderedDocument, WorksheetTemplates};
use rand::Rng;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Files left on disk by a run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateOutcome {
    /// Document sources still on disk (empty once cleaned up)
    pub sources: Vec<PathBuf>,
    /// Rendered artifacts, in render order
    pub artifacts: Vec<PathBuf>,
}

/// Load inputs, sample the layout and render both document sources
///
/// Nothing is written. Every data error (missing placeholder row, too few
/// usable rows) is reported here, before the output directory is touched.
pub fn prepare<R: Rng + ?Sized>(
    config: &GenerationConfig,
    rng: &mut R,
) -> Result<Vec<RenderedDocument>> {
    let templates = WorksheetTemplates::load(&config.templates)?;
    let vocabulary = Vocabulary::from_path(&config.words)?;
    vocabulary.ensure_capacity(config.grid.cells())?;

    let layout = sample_layout(vocabulary.usable(), &config.grid, rng)?;
    render_documents(&templates, config, &layout)
}

/// Write every document into `output`, creating it if needed
pub fn write_sources(output: &Path, documents: &[RenderedDocument]) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(output).map_err(|e| KanjiError::io(output, e))?;

    documents
        .iter()
        .map(|document| {
            let path = output.join(document.file_name());
            fs::write(&path, &document.source).map_err(|e| KanjiError::io(&path, e))?;
            log::debug!("Wrote {}", path.display());
            Ok(path)
        })
        .collect()
}

/// Remove a generated file, tolerating its absence
fn remove_generated(path: &Path) {
    match fs::remove_file(path) {
        Ok(()) => log::debug!("Removed {}", path.display()),
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => log::warn!("Could not remove '{}': {}", path.display(), e),
    }
}

/// Run the whole pipeline
///
/// With a renderer, sources are rendered in order (test, then solution). The
/// first failure stops the run and leaves the sources on disk. Once both
/// renders succeed, sources and renderer byproducts are deleted unless
/// `config.keep_source` is set. Without a renderer, only the sources are
/// written.
pub fn generate<R: Rng + ?Sized>(
    config: &GenerationConfig,
    renderer: Option<&dyn Renderer>,
    rng: &mut R,
) -> Result<GenerateOutcome> {
    let documents = prepare(config, rng)?;
    let sources = write_sources(&config.output, &documents)?;

    let Some(renderer) = renderer else {
        return Ok(GenerateOutcome {
            sources,
            artifacts: Vec::new(),
        });
    };

    let artifacts = sources
        .iter()
        .map(|source| {
            log::info!("Rendering {} with {}", source.display(), renderer.name());
            renderer.render(source)
        })
        .collect::<Result<Vec<_>>>()?;

    if config.keep_source {
        return Ok(GenerateOutcome { sources, artifacts });
    }

    for source in &sources {
        for byproduct in renderer.byproducts(source) {
            remove_generated(&byproduct);
        }
        remove_generated(source);
    }

    Ok(GenerateOutcome {
        sources: Vec::new(),
        artifacts,
    })
}
