use serde::{Deserialize, Serialize};

use crate::Position;

/// A literal value: a scalar or a group of values.
///
/// Scalars keep the raw text captured by the parser, no numeric parsing is done on them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Value {
    Bool {
        #[serde(default)]
        position: Position,
        value: String,
    },
    Float {
        #[serde(default)]
        position: Position,
        value: String,
    },
    Int {
        #[serde(default)]
        position: Position,
        value: String,
    },
    String {
        #[serde(default)]
        position: Position,
        value: String,
    },
    /// The raw single-quoted literal, decoded with [`Char::capture`](crate::Char::capture).
    Char {
        #[serde(default)]
        position: Position,
        value: String,
    },
    List {
        #[serde(default)]
        position: Position,
        values: Vec<Value>,
    },
    Struct {
        #[serde(default)]
        position: Position,
        fields: Vec<Value>,
    },
}

impl Value {
    pub fn pos(&self) -> &Position {
        match self {
            Value::Bool { position, .. }
            | Value::Float { position, .. }
            | Value::Int { position, .. }
            | Value::String { position, .. }
            | Value::Char { position, .. }
            | Value::List { position, .. }
            | Value::Struct { position, .. } => position,
        }
    }

    /// Whether this value groups other values.
    pub fn is_group(&self) -> bool {
        matches!(self, Value::List { .. } | Value::Struct { .. })
    }

    /// The members of a group, in source order. Scalars have none.
    pub fn members(&self) -> &[Value] {
        match self {
            Value::List { values, .. } => values,
            Value::Struct { fields, .. } => fields,
            _ => &[],
        }
    }
}
