use projanitor::cli::{Args, Command, commands::report_failure};
use std::process;

fn main() {
    let args = Args::parse_args();

    let command = match Command::from_args(args) {
        Ok(command) => command,
        Err(err) => process::exit(report_failure(&err)),
    };

    init_logging(command.settings().is_some_and(|s| s.verbose));

    process::exit(command.run());
}

/// Recoverable problems are logged as warnings, so they only show up in
/// verbose mode.
fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::ERROR
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
