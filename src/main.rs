//! Command-line entry point
//!
//! Warnings and the error line go to stdout; diagnostics go to stderr. The
//! exit status is 0 whether or not the run succeeded.

use data_sorter::{parse_args, sort_file, SortResult};
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};

fn main() {
    if let Err(e) = run() {
        println!("{e}");
    }
}

fn run() -> SortResult<()> {
    let config = parse_args(std::env::args_os())?;

    init_logging(config.debug);

    let count = sort_file(&config, |warning| println!("{warning}"))?;
    log::info!("wrote {count} items");
    Ok(())
}

fn init_logging(debug: bool) {
    let level = if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    let log_config = ConfigBuilder::new()
        .set_time_level(LevelFilter::Off)
        .build();

    if let Err(err) = TermLogger::init(level, log_config, TerminalMode::Stderr, ColorChoice::Auto) {
        eprintln!("data-sorter: diagnostics disabled: {err}");
    }
}
