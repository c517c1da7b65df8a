use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[clap(name = "deflemma", about = "Front-end of the deflemma language")]
pub struct Opt {
    #[clap(flatten)]
    pub logger: LoggerOpt,

    /// When to color the diagnostics
    #[clap(long, value_enum, default_value = "auto")]
    pub color: ColorOpt,

    /// What to do with the files
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Type check the source modules
    Check(FilesOpt),
    /// Print the lowered form of the source modules, as JSON
    Ir(FilesOpt),
    /// Print the constants defined in the data files
    Data(FilesOpt),
}

#[derive(Parser, Debug, Clone)]
pub struct FilesOpt {
    /// The syntax trees to process, as produced by the parser (JSON)
    #[clap(required = true)]
    pub files: Vec<PathBuf>,
}

#[derive(Parser, Debug, Clone)]
pub struct LoggerOpt {
    /// Verbose mode (-v, -vv, -vvv, etc.)
    #[clap(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorOpt {
    /// Color only when writing to a terminal
    Auto,
    Always,
    Never,
}

impl LoggerOpt {
    pub fn enable_log(&self) {
        if self.verbose > 0 {
            std::env::set_var("RUST_BACKTRACE", "1");
            match self.verbose {
                0 => unreachable!(),
                1 => std::env::set_var("RUST_LOG", "info"),
                2 => std::env::set_var("RUST_LOG", "debug"),
                _ => std::env::set_var("RUST_LOG", "trace"),
            }
        }

        env_logger::Builder::from_default_env()
            .format_timestamp_nanos()
            .init();
        better_panic::install();
    }
}

impl ColorOpt {
    pub fn apply(&self) {
        match self {
            ColorOpt::Auto => {}
            ColorOpt::Always => colored::control::set_override(true),
            ColorOpt::Never => colored::control::set_override(false),
        }
    }
}
