use std::fmt::{Display, Formatter};

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::TypeId;

/// A type with its generic parameters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Type {
    pub name: String,
    /// Empty when the type has no generic parameters.
    pub generics: Vec<Type>,
}

impl Type {
    pub fn new(name: impl Into<String>, generics: Vec<Type>) -> Self {
        Self {
            name: name.into(),
            generics,
        }
    }
}

impl Display for Type {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.generics.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{}[{}]", self.name, self.generics.iter().join(", "))
        }
    }
}

/// The name of an imported module or symbol.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImportName(pub String);

impl Display for ImportName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A typed input of a declaration: a field of a struct or a parameter of a function.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReferenceInput {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: Type,
}

/// The operation of an [`IrExpression`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OpCode {
    #[default]
    Noop,
    Const,
    Call,
}

/// A node of the lowered body of a function.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IrExpression {
    pub type_id: TypeId,
    pub op: OpCode,
    pub value: Vec<String>,
}

/// What kind of declaration a [`Reference`] is, and its lowered body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DefinitionMonad {
    pub is_struct: bool,
    pub is_function: bool,
    pub is_operator: bool,
    /// Empty when the declaration has no annotation.
    pub annotation: String,
    pub expressions: Vec<IrExpression>,
}

/// A lowered declaration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Reference {
    /// The identifier of the declaration, also the key of its position in the symbol table.
    pub unique_id: u64,
    pub name: String,
    pub inputs: Vec<ReferenceInput>,
    /// `None` for a function that does not declare its return type.
    pub return_type: Option<Type>,
    pub definition: DefinitionMonad,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_type_display() {
        let ty = Type::new(
            "Map",
            vec![
                Type::new("Text", vec![]),
                Type::new("List", vec![Type::new("Int", vec![])]),
            ],
        );
        assert_eq!(ty.to_string(), "Map[Text, List[Int]]");
        assert_eq!(Type::new("Int", vec![]).to_string(), "Int");
    }
}
