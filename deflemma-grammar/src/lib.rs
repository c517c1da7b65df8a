//! The syntax trees of deflemma source files.
//!
//! These are the shapes produced by the parser: a [`Module`] for `.dfl` source files and a
//! [`Configuration`] for `.ddat` data files. Parsing itself is not done here, the trees are built
//! by an external parser and handed over (for example as JSON, every node derives
//! `Serialize`/`Deserialize`).
//!
//! Every node carries the [`Position`] where it starts, used only for reporting diagnostics.

mod config;
mod expression;
mod literal;
mod module;
mod position;
mod value;

use serde::{Deserialize, Serialize};

pub use config::{Assignment, Configuration};
pub use expression::{
    BlockConditional, Capture, Expression, ExpressionCategory, InlineConditional, Label, Literal,
    Operator, Parenthetical, Reference, SubConditional,
};
pub use literal::{Char, FunctionName, LiteralFormatError};
pub use module::{
    Function, FunctionDefinition, FunctionModulePart, Import, ImportModulePart, Input, Module,
    ModulePart, Pattern, Struct, StructModulePart, Type,
};
pub use position::Position;
pub use value::Value;

/// The syntax tree of any source file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum SourceAst {
    Module(Module),
    Configuration(Configuration),
}

impl SourceAst {
    /// The name of the kind of this tree.
    pub fn kind(&self) -> &'static str {
        match self {
            SourceAst::Module(_) => "Module",
            SourceAst::Configuration(_) => "Configuration",
        }
    }
}
