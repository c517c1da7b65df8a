use anyhow::{bail, Error};
use deflemma_diagnostics::DiagnosticContext;
use deflemma_ir::{type_check, UniqueIdGenerator};

use crate::commands::{file_name, load_ast};
use crate::opt::FilesOpt;

/// Type check every file, reporting all the failures before exiting.
pub fn main_check(opt: FilesOpt) -> Result<(), Error> {
    let mut ids = UniqueIdGenerator::new();
    let mut diagnostics = DiagnosticContext::new();

    for path in &opt.files {
        let ast = load_ast(path)?;
        let name = file_name(path);
        match type_check(&name, &ast, &mut ids) {
            Ok(result) => println!("{}: {}", name, result),
            Err(error) => {
                let diagnostic = error.to_diagnostic();
                eprint!("{}", diagnostic);
                diagnostics.add_diagnostic(diagnostic);
            }
        }
    }

    if diagnostics.has_errors() {
        bail!(
            "{} of {} files failed the check",
            diagnostics.diagnostics().len(),
            opt.files.len()
        );
    }
    Ok(())
}
