//! Template error types

use std::fmt;

/// Template rendering errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// Token found in the template with no value supplied
    UndefinedToken {
        /// Template name (file name for templates read from disk)
        template: String,
        /// The token without its `@` delimiters
        token: String,
        /// Line number where the token occurs
        line: usize,
    },

    /// Value supplied for a token the template does not contain
    UnusedValue {
        template: String,
        token: String,
    },
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateError::UndefinedToken {
                template,
                token,
                line,
            } => {
                write!(
                    f,
                    "Undefined token '@{}@' at line {} of '{}'",
                    token, line, template
                )
            }
            TemplateError::UnusedValue { template, token } => {
                write!(
                    f,
                    "Template '{}' never uses '@{}@'. Add the token to the template or stop supplying it",
                    template, token
                )
            }
        }
    }
}

impl std::error::Error for TemplateError {}
