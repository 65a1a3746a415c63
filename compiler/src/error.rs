use thiserror::Error;

#[derive(Debug, Error)]
pub enum ToonError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOON input cannot be empty")]
    EmptyInput,

    #[error("Invalid indentation at line {line}: {msg}")]
    InvalidIndentation { msg: String, line: usize },

    #[error("Invalid TOON syntax at line {line}: {msg}")]
    InvalidSyntax { msg: String, line: usize },

    #[error("Duplicate key {key:?} at line {line}")]
    DuplicateKey { key: String, line: usize },

    #[error("Schema mismatch at line {line}: expected {expected} columns but found {actual}")]
    SchemaMismatch {
        line:     usize,
        expected: usize,
        actual:   usize,
    },

    #[error("Invalid generator configuration: {0}")]
    Config(String),
}

impl ToonError {
    /// The 1-based source line the error points at, when one is known.
    pub fn line(&self) -> Option<usize> {
        match self {
            ToonError::InvalidIndentation { line, .. }
            | ToonError::InvalidSyntax { line, .. }
            | ToonError::DuplicateKey { line, .. }
            | ToonError::SchemaMismatch { line, .. } => Some(*line),
            _ => None,
        }
    }
}
