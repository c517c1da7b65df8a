use anyhow::Error;
use colored::Colorize;

/// Adds methods for failing without panic. Like `expect` but without panic.
pub trait NiceError<T> {
    /// Fail exiting with `1` if the value is an error. Otherwise return the content.
    fn nice_unwrap(self) -> T;
}

/// Print the error and its chain of causes to stderr.
fn print_error(error: &Error) {
    debug!("{:?}", error);
    eprintln!("{} {}", "Error:".bright_red().bold(), error);
    for cause in error.chain().skip(1) {
        eprintln!("\nCaused by:\n    {}", cause);
    }
}

impl<T, E> NiceError<T> for Result<T, E>
where
    E: Into<Error>,
{
    fn nice_unwrap(self) -> T {
        match self {
            Ok(x) => x,
            Err(e) => {
                print_error(&e.into());
                std::process::exit(1);
            }
        }
    }
}
