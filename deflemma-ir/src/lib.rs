//! Lowering of the syntax trees into the intermediate representation.
//!
//! [`get_ir`] turns a [`Module`](deflemma_grammar::Module) into the list of its imports and of
//! its declarations ([`Reference`]s), filling a symbol table with the position of every
//! declaration. Each declaration gets an identifier from a [`UniqueIdGenerator`], which is passed
//! in explicitly so that a compilation run can control (and reset) the numbering.
//!
//! [`value_tree`] turns a literal value of a data file into a tree of [`DataValue`]s, and
//! [`data_config`] turns a whole assignment into a [`DataConfig`].
//!
//! Every failure is an [`IrError`]: the first one aborts the operation and no partial result is
//! returned.

#[macro_use]
extern crate log;

mod check;
mod config;
mod data;
mod error;
mod ids;
mod lower;
mod reference;
mod value;

pub use check::{type_check, PASS};
pub use config::data_config;
pub use data::{DataConfig, DataValue, TypeId};
pub use error::IrError;
pub use ids::UniqueIdGenerator;
pub use lower::{get_ir, lower_expressions, lower_module, LoweredModule, SymbolPositions};
pub use reference::{
    DefinitionMonad, ImportName, IrExpression, OpCode, Reference, ReferenceInput, Type,
};
pub use value::{data_value, value_tree};
