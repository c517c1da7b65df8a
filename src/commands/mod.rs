use std::path::Path;

use anyhow::{Context, Error};
use deflemma_grammar::SourceAst;

pub mod check;
pub mod data;
pub mod ir;

/// Read the syntax tree stored, as JSON, in a file.
pub fn load_ast(path: &Path) -> Result<SourceAst, Error> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Cannot read {}", path.display()))?;
    let ast = serde_json::from_str(&content)
        .with_context(|| format!("Invalid syntax tree in {}", path.display()))?;
    debug!("Loaded {}", path.display());
    Ok(ast)
}

/// The name used for a file in the diagnostics and in the symbol tables.
pub fn file_name(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
