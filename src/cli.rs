//! Command-line definition and argument parsing
//!
//! Tokens are positional: input path, output path, kind flag, order flag.
//! Anything after the fourth token is ignored apart from a `--debug` switch.

use crate::config::{ItemKind, SortConfig, SortOrder};
use crate::error::{SortError, SortResult};
use clap::{value_parser, Arg, ArgMatches, Command};
use std::ffi::{OsStr, OsString};
use std::iter;

pub fn build_cli() -> Command {
    Command::new("data-sorter")
        .version(env!("CARGO_PKG_VERSION"))
        .override_usage("data-sorter <INPUT> <OUTPUT> (-i|-s) (-a|-d) [--debug]")
        .about("Sort a file of integers or text lines")
        .disable_help_flag(true) // -i, -s, -a, -d are positional values
        .disable_version_flag(true)
        .arg(
            Arg::new("tokens")
                .help("INPUT OUTPUT KIND ORDER, then ignored extras")
                .value_name("TOKEN")
                .num_args(0..)
                .allow_hyphen_values(true)
                .trailing_var_arg(true)
                .value_parser(value_parser!(OsString)),
        )
}

/// Parse the full argument vector, program name included.
pub fn parse_args<I, T>(args: I) -> SortResult<SortConfig>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args = args.into_iter().map(Into::into);
    // A leading `--` puts clap in trailing mode, so every user token,
    // including a literal `--` or `--debug`, stays in place
    let argv = args
        .next()
        .into_iter()
        .chain(iter::once(OsString::from("--")))
        .chain(args);

    let matches = build_cli().try_get_matches_from(argv).map_err(|err| {
        log::debug!("argument parsing failed: {err}");
        SortError::InvalidArguments {
            message: format!(
                "Error: {}!",
                err.kind().as_str().unwrap_or("invalid arguments")
            ),
        }
    })?;

    parse_config_from_matches(&matches)
}

fn parse_config_from_matches(matches: &ArgMatches) -> SortResult<SortConfig> {
    let tokens: Vec<&OsString> = matches
        .get_many::<OsString>("tokens")
        .unwrap_or_default()
        .collect();

    let [input, output, kind, order, rest @ ..] = tokens.as_slice() else {
        return Err(SortError::not_enough_arguments());
    };

    let kind: ItemKind = flag(kind)?.parse()?;
    let order: SortOrder = flag(order)?.parse()?;
    let debug = rest.iter().any(|extra| extra.as_os_str() == "--debug");

    Ok(SortConfig::new(input.as_os_str(), output.as_os_str())
        .with_kind(kind)
        .with_order(order)
        .with_debug(debug))
}

fn flag(token: &OsStr) -> SortResult<&str> {
    token
        .to_str()
        .ok_or_else(|| SortError::illegal_argument(&token.to_string_lossy()))
}
