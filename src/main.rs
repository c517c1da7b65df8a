use clap::Parser;

use deflemma::commands::check::main_check;
use deflemma::commands::data::main_data;
use deflemma::commands::ir::main_ir;
use deflemma::error::NiceError;
use deflemma::{Command, Opt};

fn main() {
    let opt = Opt::parse();
    opt.logger.enable_log();
    opt.color.apply();

    match opt.command {
        Command::Check(opt) => main_check(opt),
        Command::Ir(opt) => main_ir(opt),
        Command::Data(opt) => main_data(opt),
    }
    .nice_unwrap()
}
