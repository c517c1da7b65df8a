use std::fmt::{Display, Formatter};

use deflemma_container::GraphTree;
use serde::{Deserialize, Serialize};

/// The type of a literal value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TypeId {
    #[default]
    NoType,
    /// 1 bit when possible.
    Boolean,
    Byte,
    /// 1 to 4 bytes.
    Char,
    /// 1 to 4 bytes.
    Integer,
    /// 2 or 4 bytes.
    Decimal,
    Text,
    /// A group of values, only in data files.
    List,
    /// A group of values, only in data files.
    Struct,
}

impl TypeId {
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeId::NoType => "NO_TYPE",
            TypeId::Boolean => "BOOLEAN",
            TypeId::Byte => "BYTE",
            TypeId::Char => "CHAR",
            TypeId::Integer => "INTEGER",
            TypeId::Decimal => "DECIMAL",
            TypeId::Text => "TEXT",
            TypeId::List => "LIST",
            TypeId::Struct => "STRUCT",
        }
    }
}

impl Display for TypeId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A literal value with its type and the text it was written with.
///
/// Groups (lists and structs) have an empty text, their members are the children of their node
/// in the value tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DataValue {
    pub type_id: TypeId,
    pub text: String,
}

impl DataValue {
    pub fn new(type_id: TypeId, text: impl Into<String>) -> Self {
        Self {
            type_id,
            text: text.into(),
        }
    }

    /// An empty group value.
    pub fn group(type_id: TypeId) -> Self {
        Self::new(type_id, "")
    }
}

impl Display for DataValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.text.is_empty() {
            write!(f, "{}", self.type_id)
        } else {
            write!(f, "{}({})", self.type_id, self.text)
        }
    }
}

/// A global constant defined in a data file.
#[derive(Debug, Clone)]
pub struct DataConfig {
    /// The namespace of the constant, empty when the name is not dotted.
    pub first_name: String,
    pub second_name: String,
    pub values: GraphTree<DataValue>,
}

impl DataConfig {
    /// The full name of the constant, as written in the data file.
    pub fn name(&self) -> String {
        if self.first_name.is_empty() {
            self.second_name.clone()
        } else {
            format!("{}.{}", self.first_name, self.second_name)
        }
    }
}
