use anyhow::{bail, Context, Error};
use deflemma_container::left_depth_first;
use deflemma_grammar::SourceAst;
use deflemma_ir::data_config;
use itertools::Itertools;

use crate::commands::{file_name, load_ast};
use crate::opt::FilesOpt;

/// Print every constant of the data files, one per line, with its values in depth-first order.
pub fn main_data(opt: FilesOpt) -> Result<(), Error> {
    for path in &opt.files {
        let name = file_name(path);
        let configuration = match load_ast(path)? {
            SourceAst::Configuration(configuration) => configuration,
            ast => bail!("{} is a {}, not a data file", name, ast.kind()),
        };
        for assignment in &configuration.assignments {
            let config = match data_config(assignment) {
                Ok(config) => config,
                Err(error) => {
                    eprint!("{}", error.to_diagnostic());
                    return Err(error).with_context(|| format!("Invalid data in {}", name));
                }
            };
            let values = left_depth_first(&config.values);
            println!("{} = {}", config.name(), values.iter().join(", "));
        }
    }
    Ok(())
}
