//! Template engine implementation

use crate::error::{KanjiError, Result};
use crate::template::error::TemplateError;
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

/// Token delimiter
const DELIM: u8 = b'@';

/// A piece of a tokenized template
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Segment<'a> {
    /// Literal text copied to the output
    Text(&'a str),
    /// `@NAME@` token, stored without delimiters
    Token { name: &'a str, line: usize },
}

fn is_token_byte(b: u8) -> bool {
    b.is_ascii_uppercase() || b.is_ascii_digit() || b == b'_'
}

/// Split a template into text and tokens in one forward scan
///
/// An `@` that does not open a well-formed token (e.g. `\makeatletter`,
/// `user@example.com`, a lone `@`) is kept as literal text.
pub(crate) fn tokenize(source: &str) -> Vec<Segment<'_>> {
    let bytes = source.as_bytes();
    let mut segments = Vec::new();
    let mut text_start = 0;
    let mut pos = 0;
    let mut line = 1;

    while pos < bytes.len() {
        match bytes[pos] {
            b'\n' => {
                line += 1;
                pos += 1;
            }
            DELIM => {
                let name_len = bytes[pos + 1..]
                    .iter()
                    .take_while(|&&b| is_token_byte(b))
                    .count();
                let close = pos + 1 + name_len;

                if name_len > 0 && bytes.get(close) == Some(&DELIM) {
                    if text_start < pos {
                        segments.push(Segment::Text(&source[text_start..pos]));
                    }
                    segments.push(Segment::Token {
                        name: &source[pos + 1..close],
                        line,
                    });
                    pos = close + 1;
                    text_start = pos;
                } else {
                    pos += 1;
                }
            }
            _ => pos += 1,
        }
    }

    if text_start < bytes.len() {
        segments.push(Segment::Text(&source[text_start..]));
    }

    segments
}

/// Token values for one render call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateValues {
    values: BTreeMap<String, String>,
}

impl TemplateValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the value of `token` (given without `@` delimiters)
    pub fn with(mut self, token: &str, value: impl ToString) -> Self {
        self.values.insert(token.to_string(), value.to_string());
        self
    }

    pub fn get(&self, token: &str) -> Option<&str> {
        self.values.get(token).map(String::as_str)
    }

    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }
}

/// A named template source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    name: String,
    source: String,
}

impl Template {
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
        }
    }

    /// Read a template file, named after its file name
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| KanjiError::io(path, e))?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Self::new(name, source))
    }

    /// Distinct token names used by the template
    #[cfg(test)]
    pub(crate) fn tokens(&self) -> BTreeSet<&str> {
        tokenize(&self.source)
            .into_iter()
            .filter_map(|segment| match segment {
                Segment::Token { name, .. } => Some(name),
                Segment::Text(_) => None,
            })
            .collect()
    }

    /// Substitute every token with its value
    pub fn render(&self, values: &TemplateValues) -> std::result::Result<String, TemplateError> {
        let mut output = String::with_capacity(self.source.len());
        let mut used = BTreeSet::new();

        for segment in tokenize(&self.source) {
            match segment {
                Segment::Text(text) => output.push_str(text),
                Segment::Token { name, line } => {
                    let value = values
                        .get(name)
                        .ok_or_else(|| TemplateError::UndefinedToken {
                            template: self.name.clone(),
                            token: name.to_string(),
                            line,
                        })?;
                    output.push_str(value);
                    used.insert(name);
                }
            }
        }

        if cfg!(debug_assertions) {
            if let Some(unused) = values.tokens().find(|token| !used.contains(token)) {
                return Err(TemplateError::UnusedValue {
                    template: self.name.clone(),
                    token: unused.to_string(),
                });
            }
        }

        Ok(output)
    }
}
