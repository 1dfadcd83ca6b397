use thiserror::Error;

/// A recoverable condition noticed while transforming one note.
///
/// Warnings never abort a run; the engine degrades to best-effort output and
/// reports what it could not represent. Line numbers are 1-based and refer to
/// the source document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Warning {
    #[error("line {line}: frontmatter block is never closed, treating it as body text")]
    UnterminatedFrontmatter { line: usize },
    #[error("line {line}: code fence is never closed")]
    UnclosedFence { line: usize },
    #[error("line {line}: ordered list markers are not outlined, kept as plain text")]
    OrderedList { line: usize },
    #[error("line {line}: link or embed seems to span multiple lines, left unchanged")]
    CrossLineLink { line: usize },
}

impl Warning {
    pub fn line(&self) -> usize {
        match self {
            Warning::UnterminatedFrontmatter { line }
            | Warning::UnclosedFence { line }
            | Warning::OrderedList { line }
            | Warning::CrossLineLink { line } => *line,
        }
    }
}
