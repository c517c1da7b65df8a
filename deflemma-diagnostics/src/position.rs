use std::fmt::{Display, Formatter};
use std::num::NonZeroUsize;

use colored::Colorize;
use serde::{Deserialize, Serialize};

use crate::DiagnosticLevel;

/// The position of a declaration inside a source file.
///
/// Positions are recorded once per declaration while lowering and never change afterwards; they
/// are only consulted when reporting diagnostics.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub struct SymbolPosition {
    /// The name of the file where the declaration comes from.
    pub file_name: String,
    /// The line number inside the file, starting from 1.
    pub line: NonZeroUsize,
    /// The column inside the line, starting from 1.
    pub column: NonZeroUsize,
}

impl SymbolPosition {
    /// Make a new [`SymbolPosition`]. Line and column numbers start from 1, a zero is clamped to
    /// 1.
    pub fn new(file_name: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            file_name: file_name.into(),
            line: NonZeroUsize::new(line).unwrap_or(NonZeroUsize::MIN),
            column: NonZeroUsize::new(column).unwrap_or(NonZeroUsize::MIN),
        }
    }

    /// Obtain a string (with colors) of this position, ready to be printed under a diagnostic.
    pub fn render(&self, level: DiagnosticLevel) -> String {
        format!("{} {}\n", "-->".color(level.color()).bold(), self)
    }
}

impl Display for SymbolPosition {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.file_name, self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::SymbolPosition;

    #[test]
    fn test_zero_is_clamped() {
        let position = SymbolPosition::new("file.dfl", 0, 0);
        assert_eq!(position.line.get(), 1);
        assert_eq!(position.column.get(), 1);
    }

    #[test]
    fn test_display() {
        let position = SymbolPosition::new("src/main.dfl", 3, 14);
        assert_eq!(format!("{}", position), "src/main.dfl:3:14");
    }
}
