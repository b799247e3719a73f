use crate::error::Result;
use std::path::{Path, PathBuf};

/// External program turning a document source into a final artifact
pub trait Renderer {
    /// Short name used in progress output
    fn name(&self) -> &str;

    /// Render `source` and return the path of the produced artifact
    ///
    /// Blocks until the renderer exits; there is no timeout.
    fn render(&self, source: &Path) -> Result<PathBuf>;

    /// Auxiliary files left next to `source` by a successful render
    fn byproducts(&self, _source: &Path) -> Vec<PathBuf> {
        Vec::new()
    }
}
