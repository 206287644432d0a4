use std::ffi::OsStr;
use std::process::ExitCode;

use anyhow::{Result, bail};
use clap::{ArgAction, CommandFactory, Parser, ValueHint};
use log::LevelFilter;

use crate::github::DEFAULT_API_URL;

mod run_impl;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "gh-activity",
    version,
    about = "Show a GitHub user's recent public activity",
    long_about = None
)]
pub struct Args {
    /// GitHub username whose public events are listed
    #[arg(value_name = "USERNAME")]
    pub username: Option<String>,

    /// Limit number of events displayed
    #[arg(long = "limit", value_name = "N")]
    pub limit: Option<usize>,

    /// Output JSON instead of a list
    #[arg(long = "json", action = ArgAction::SetTrue)]
    pub json: bool,

    /// Verbose logging (repeat for more)
    #[arg(long = "verbose", short = 'v', action = ArgAction::Count)]
    pub verbose: u8,

    /// Base URL of the GitHub REST API
    #[arg(
        long = "api-url",
        value_name = "URL",
        default_value = DEFAULT_API_URL,
        value_hint = ValueHint::Url,
        hide = true
    )]
    pub api_url: String,
}

/// Runs the CLI application.
///
/// A help flag anywhere on the command line wins over every other argument.
/// Help and version requests exit successfully; any other argument problem is
/// reported by clap and exits with failure.
///
/// # Errors
/// Returns an error for a missing username or a failed fetch.
pub fn run() -> Result<ExitCode> {
    if wants_help(std::env::args_os().skip(1)) {
        Args::command().print_help()?;
        return Ok(ExitCode::SUCCESS);
    }

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            return Ok(if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            });
        }
    };
    init_logging(args.verbose);

    let Some(username) = args.username.as_deref().filter(|u| !u.trim().is_empty()) else {
        bail!("GitHub username is required.");
    };
    run_impl::run_with_args(&args, username)
}

fn wants_help<I, T>(args: I) -> bool
where
    I: IntoIterator<Item = T>,
    T: AsRef<OsStr>,
{
    args.into_iter()
        .map(|a| a.as_ref().to_owned())
        .take_while(|a| a != "--")
        .any(|a| a == "--help" || a == "-h")
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .parse_default_env()
        .try_init()
        .ok();
}
