// Core modules
pub mod config;
pub mod error;
pub mod generate;
pub mod layout;
pub mod render;
pub mod template;
pub mod vocab;
pub mod worksheet;

// Re-export commonly used types
pub use config::{GenerationConfig, GenerationOptions, Grid, Language};
pub use error::{KanjiError, Result, Stage};
pub use generate::{generate, prepare, write_sources, GenerateOutcome};
pub use layout::{rng_from_seed, sample_layout, Layout, LayoutMask};
pub use render::Renderer;
pub use vocab::{Vocabulary, VocabularyEntry};
pub use worksheet::{RenderedDocument, Variant, WorksheetTemplates};
