use deflemma_diagnostics::{Diagnostic, SymbolPosition};
use deflemma_grammar::{LiteralFormatError, Position};
use thiserror::Error;

/// Why a syntax tree could not be lowered.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum IrError {
    #[error("Expected a {expected} but found a {found}")]
    TypeMismatch { expected: String, found: String },
    #[error("Malformed {what} at {position}: {reason}")]
    MalformedAst {
        what: String,
        position: Position,
        reason: String,
    },
    #[error(transparent)]
    LiteralFormat(#[from] LiteralFormatError),
}

impl IrError {
    pub(crate) fn malformed(
        what: impl Into<String>,
        position: &Position,
        reason: impl Into<String>,
    ) -> Self {
        IrError::MalformedAst {
            what: what.into(),
            position: position.clone(),
            reason: reason.into(),
        }
    }

    /// The position of the node that caused the error, if known.
    pub fn position(&self) -> Option<&Position> {
        match self {
            IrError::TypeMismatch { .. } => None,
            IrError::MalformedAst { position, .. } => Some(position),
            IrError::LiteralFormat(error) => Some(error.position()),
        }
    }

    /// Make a [`Diagnostic`] out of this error, ready to be shown to the user.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diagnostic = match self {
            IrError::TypeMismatch { .. } => Diagnostic::error(self.to_string())
                .with_help("Only source modules can be type checked"),
            IrError::MalformedAst { what, reason, .. } => {
                Diagnostic::error(format!("Malformed {}", what)).with_note(reason.clone())
            }
            IrError::LiteralFormat(error) => Diagnostic::error(error.to_string()),
        };
        match self.position() {
            Some(position) if position.line > 0 => diagnostic.with_position(SymbolPosition::new(
                position.filename.clone(),
                position.line,
                position.column,
            )),
            Some(position) => {
                warn!(
                    "The syntax tree of {} has no line for: {}",
                    position.filename, self
                );
                diagnostic
            }
            None => diagnostic,
        }
    }
}
