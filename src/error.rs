use std::fmt;
use std::path::Path;

/// The main error type for header generation.
#[derive(Debug, Clone, PartialEq)]
pub enum DefgenError {
    /// Raised when the input is not well-formed YAML.
    ParseError {
        message: String,
        path: String,
    },
    /// Raised when an input file cannot be read or an output file cannot
    /// be created or written.
    FileError {
        message: String,
        path: String,
        hint: Option<String>,
    },
}

impl DefgenError {
    /// Attach (or replace) the file path an error is reported against.
    pub fn with_path(self, path: &Path) -> Self {
        match self {
            DefgenError::ParseError { message, .. } => DefgenError::ParseError {
                message,
                path: path.display().to_string(),
            },
            DefgenError::FileError { message, hint, .. } => DefgenError::FileError {
                message,
                path: path.display().to_string(),
                hint,
            },
        }
    }
}

impl fmt::Display for DefgenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DefgenError::ParseError { message, path } => {
                if path.is_empty() {
                    write!(f, "[defgen] Parse Error: {}", message)
                } else {
                    write!(f, "[defgen] Parse Error in '{}': {}", path, message)
                }
            }
            DefgenError::FileError { message, path, hint } => write!(
                f,
                "[defgen] File Error '{}': {}{}",
                path,
                message,
                hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h))
            ),
        }
    }
}

impl std::error::Error for DefgenError {}
