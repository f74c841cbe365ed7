mod cli;
mod logging;

use crate::cli::Cli;

fn main() {
    // Initialize logging as early as possible.
    if let Err(err) = logging::init_logging() {
        eprintln!("routeurl error: {:#}", err);
        std::process::exit(1);
    }

    // Parse CLI and dispatch.
    if let Err(err) = Cli::run_from_args() {
        eprintln!("routeurl error: {:#}", err);
        std::process::exit(1);
    }
}
