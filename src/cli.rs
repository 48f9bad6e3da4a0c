// src/cli.rs
use std::{ io::{ self, Write }, path::PathBuf };

use log::info;

use crate::{
    config::options::{ Action, RunOptions, Source },
    core::net::HttpFetcher,
    error::{ Error, Result },
    file,
    runner::{ self, RunSummary },
};

pub const USAGE: &str = include_str!("cli_help.txt");

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Run(RunOptions),
    Help,
}

pub fn parse_args<I>(args: I) -> Result<Command>
where
    I: IntoIterator<Item = String>,
{
    let mut opts = RunOptions::default();
    let mut url: Option<String> = None;
    let mut input: Option<PathBuf> = None;

    let mut args = args.into_iter();
    while let Some(a) = args.next() {
        match a.as_str() {
            "-u" | "--url" => url = Some(value(&mut args, "--url")?),
            "-i" | "--input" => input = Some(PathBuf::from(value(&mut args, "--input")?)),
            "-o" | "--out" => opts.out = Some(PathBuf::from(value(&mut args, "--out")?)),
            "-l" | "--list" => opts.action = Action::ListRobots,
            "-h" | "--help" => return Ok(Command::Help),
            _ => return Err(Error::Usage(format!("Unknown arg: {a}"))),
        }
    }

    opts.source = match (url, input) {
        (Some(_), Some(_)) => return Err(Error::Usage(s!("--url and --input are mutually exclusive"))),
        (Some(url), None) => Source::Url(url),
        (None, Some(path)) => Source::File(path),
        (None, None) => opts.source,
    };
    Ok(Command::Run(opts))
}

fn value(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<String> {
    args.next().ok_or_else(|| Error::Usage(format!("Missing value for {flag}")))
}

/// Run against the real network and write to stdout or `--out`.
pub fn run(opts: &RunOptions) -> Result<RunSummary> {
    let fetcher = HttpFetcher::new();
    let mut buf = Vec::new();
    let summary = runner::run(opts, &fetcher, &mut buf)?;

    match &opts.out {
        Some(path) => {
            file::write_output(path, &buf)?;
            info!("Wrote {} ({} robots)", path.display(), summary.robots.len());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(&buf)?;
            stdout.flush()?;
        }
    }
    Ok(summary)
}
