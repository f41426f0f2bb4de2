//! change-analyzer main entrypoint.

use change_analyzer::errors::AppError;
use change_analyzer::run;
use change_analyzer::ui::messages::{error, warning};

fn main() {
    if let Err(e) = run() {
        match e {
            AppError::EmptyInput => warning(&e),
            _ => error(format!("Error: {e}")),
        }
        std::process::exit(1);
    }
}
