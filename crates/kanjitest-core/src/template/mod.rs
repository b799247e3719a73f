//! Template module - literal token substitution
//!
//! Worksheet templates are LaTeX sources containing `@NAME@` tokens, where
//! `NAME` is made of uppercase ASCII letters, digits and underscores.
//!
//! ## Rules
//!
//! - **Single pass**: substituted values are never scanned again, so a title
//!   containing `@` or a whole rendered sub-template is inserted verbatim
//! - **No escaping**: values are copied as-is; LaTeX markup passes through
//! - **Strict tokens**: a token without a value is an error
//! - **No dead values**: in debug builds, a value whose token never appears
//!   in the template is an error, so template files and code cannot drift

pub mod engine;
pub mod error;

#[cfg(test)]
mod tests;

pub use engine::{Template, TemplateValues};
pub use error::TemplateError;
