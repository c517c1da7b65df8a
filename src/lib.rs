//! # deflemma
//!
//! Command line front-end of the deflemma language. The syntax trees produced by the parser are
//! read as JSON, then type checked (`check`), lowered (`ir`) or evaluated as data files (`data`).

#[macro_use]
extern crate log;

pub mod commands;
pub mod error;
pub mod opt;

pub use opt::*;
