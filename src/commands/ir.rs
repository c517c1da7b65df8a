use anyhow::{bail, Context, Error};
use deflemma_grammar::SourceAst;
use deflemma_ir::{lower_module, UniqueIdGenerator};

use crate::commands::{file_name, load_ast};
use crate::opt::FilesOpt;

/// Print the lowered form of every module as pretty JSON. The identifiers keep growing across
/// the files, so they are unique in the whole run.
pub fn main_ir(opt: FilesOpt) -> Result<(), Error> {
    let mut ids = UniqueIdGenerator::new();

    for path in &opt.files {
        let name = file_name(path);
        let module = match load_ast(path)? {
            SourceAst::Module(module) => module,
            ast => bail!("{} is a {}, not a module", name, ast.kind()),
        };
        let lowered = match lower_module(&name, &module, &mut ids) {
            Ok(lowered) => lowered,
            Err(error) => {
                eprint!("{}", error.to_diagnostic());
                return Err(error).with_context(|| format!("Cannot lower {}", name));
            }
        };
        let json = serde_json::to_string_pretty(&lowered).context("Cannot serialize the IR")?;
        println!("{}", json);
    }
    Ok(())
}
