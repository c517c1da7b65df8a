use deflemma_grammar::SourceAst;

use crate::{get_ir, IrError, SymbolPositions, UniqueIdGenerator};

/// What [`type_check`] returns for a module that passes the check.
pub const PASS: &str = "PASS";

/// Check a source file.
///
/// Only modules can be checked. For now the check consists in lowering the module: a module that
/// lowers cleanly passes.
pub fn type_check(
    file_name: &str,
    ast: &SourceAst,
    ids: &mut UniqueIdGenerator,
) -> Result<String, IrError> {
    let module = match ast {
        SourceAst::Module(module) => module,
        other => {
            return Err(IrError::TypeMismatch {
                expected: "Module".into(),
                found: other.kind().into(),
            })
        }
    };
    let mut symbols = SymbolPositions::new();
    get_ir(file_name, module, ids, &mut symbols)?;
    info!("{} passed the check", file_name);
    Ok(PASS.to_string())
}
