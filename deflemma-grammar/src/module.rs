use serde::{Deserialize, Serialize};

use crate::{Expression, FunctionName, Position};

/// A `.dfl` source file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Module {
    #[serde(default)]
    pub position: Position,
    #[serde(default)]
    pub parts: Vec<ModulePart>,
}

/// A top-level unit of a [`Module`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "part")]
pub enum ModulePart {
    Import(ImportModulePart),
    Struct(StructModulePart),
    Function(FunctionModulePart),
}

impl ModulePart {
    pub fn pos(&self) -> &Position {
        match self {
            ModulePart::Import(part) => &part.position,
            ModulePart::Struct(part) => &part.position,
            ModulePart::Function(part) => &part.position,
        }
    }
}

/// A run of consecutive `use` lines.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImportModulePart {
    #[serde(default)]
    pub position: Position,
    pub imports: Vec<Import>,
}

/// `use name` or `use ( name ... )`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Import {
    Single {
        #[serde(default)]
        position: Position,
        name: String,
    },
    List {
        #[serde(default)]
        position: Position,
        names: Vec<String>,
    },
}

impl Import {
    pub fn pos(&self) -> &Position {
        match self {
            Import::Single { position, .. } | Import::List { position, .. } => position,
        }
    }

    /// The imported names, in source order.
    pub fn names(&self) -> &[String] {
        match self {
            Import::Single { name, .. } => std::slice::from_ref(name),
            Import::List { names, .. } => names,
        }
    }
}

/// A run of consecutive struct declarations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StructModulePart {
    #[serde(default)]
    pub position: Position,
    pub structs: Vec<Struct>,
}

/// `struct Name ( <Type field> ... )`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Struct {
    #[serde(default)]
    pub position: Position,
    pub name: String,
    #[serde(default)]
    pub fields: Vec<Input>,
}

/// A run of consecutive function declarations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FunctionModulePart {
    #[serde(default)]
    pub position: Position,
    pub functions: Vec<Function>,
}

/// `@annotation ReturnType name <Type input> ... definition`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Function {
    #[serde(default)]
    pub position: Position,
    #[serde(default)]
    pub annotation: Option<String>,
    #[serde(default)]
    pub return_type: Option<Type>,
    pub name: FunctionName,
    #[serde(default)]
    pub inputs: Vec<Input>,
    pub definition: FunctionDefinition,
}

/// A type, with its generic parameters: `Name[A, B[C]]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Type {
    pub name: String,
    #[serde(default)]
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

/// A typed name: a field of a struct or an input of a function.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Input {
    #[serde(default)]
    pub position: Position,
    #[serde(rename = "type")]
    pub ty: Type,
    pub name: String,
}

/// The body of a [`Function`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum FunctionDefinition {
    /// `:= expression`
    Constexpr {
        #[serde(default)]
        position: Position,
        expressions: Vec<Expression>,
    },
    /// `begin ... end`
    Block {
        #[serde(default)]
        position: Position,
        instructions: Vec<Expression>,
    },
    /// `evals ... endeval`
    Pattern {
        #[serde(default)]
        position: Position,
        patterns: Vec<Pattern>,
    },
}

impl FunctionDefinition {
    pub fn pos(&self) -> &Position {
        match self {
            FunctionDefinition::Constexpr { position, .. }
            | FunctionDefinition::Block { position, .. }
            | FunctionDefinition::Pattern { position, .. } => position,
        }
    }
}

/// `name params... = definition`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pattern {
    #[serde(default)]
    pub position: Position,
    pub name: String,
    #[serde(default)]
    pub params: Vec<String>,
    pub definition: Expression,
}
