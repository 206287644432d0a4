use std::process::ExitCode;

use anyhow::Result;
use log::{debug, info};

use crate::github::ActivityClient;
use crate::{activity, formatters};

use super::Args;

pub struct ActivityOptions {
    pub limit: Option<usize>,
    pub json: bool,
}

impl From<&Args> for ActivityOptions {
    fn from(args: &Args) -> Self {
        ActivityOptions {
            limit: args.limit,
            json: args.json,
        }
    }
}

pub fn run_with_args(args: &Args, username: &str) -> Result<ExitCode> {
    let opts = ActivityOptions::from(args);
    let client = ActivityClient::new(&args.api_url)?;

    info!("Fetching public events for {username}");
    if let Some(n) = opts.limit {
        debug!("Display limit: {n}");
    }
    let events = client.fetch_events(username)?;
    info!("Received {} events", events.len());

    if events.is_empty() {
        eprintln!("No recent public activity found.");
        return Ok(ExitCode::SUCCESS);
    }

    let lines = activity::select(&events, opts.limit);
    debug!("Formatted {} of {} events", lines.len(), events.len());

    if opts.json {
        let s = serde_json::to_string_pretty(&lines)?;
        println!("{s}");
    } else {
        print!("{}", formatters::list::format(&lines));
    }

    if lines.is_empty() {
        eprintln!("No supported recent activity found.");
    }
    Ok(ExitCode::SUCCESS)
}
