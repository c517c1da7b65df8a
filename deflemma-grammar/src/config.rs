use serde::{Deserialize, Serialize};

use crate::{Position, Value};

/// A `.ddat` data file: a list of global constant assignments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Configuration {
    #[serde(default)]
    pub position: Position,
    #[serde(default)]
    pub assignments: Vec<Assignment>,
}

/// `first.second = value`, or `first = value`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Assignment {
    #[serde(default)]
    pub position: Position,
    pub first_name: String,
    #[serde(default)]
    pub second_name: Option<String>,
    pub value: Value,
}
