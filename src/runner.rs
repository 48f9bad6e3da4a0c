// src/runner.rs
// Orchestration: load the page, extract, list + render each robot, write.
// Everything is rendered before the first byte is written, so a failing
// robot leaves the output untouched.

use std::{ fs, io::Write };

use log::info;

use crate::{
    config::options::{ Action, RunOptions, Source },
    core::net::Fetch,
    data::ScrapedDataset,
    error::Result,
    kinematics::list_parameters,
    render::finalize,
    specs::dh_tables,
};

/// What a run produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunSummary {
    /// Robot names in page order.
    pub robots: Vec<String>,
}

/// Page HTML from the network or from a saved file.
pub fn load_page(source: &Source, fetcher: &dyn Fetch) -> Result<String> {
    match source {
        Source::Url(url) => fetcher.get(url),
        Source::File(path) => {
            info!("Reading {}", path.display());
            Ok(fs::read_to_string(path)?)
        }
    }
}

/// One Markdown section per robot, in dataset order.
pub fn render_dataset(dataset: &ScrapedDataset) -> Result<Vec<String>> {
    dataset
        .iter()
        .map(|(name, table)| Ok(finalize(name, &list_parameters(name, table)?)))
        .collect()
}

/// HTML document straight to rendered sections.
pub fn render_page(html_doc: &str) -> Result<Vec<String>> {
    render_dataset(&dh_tables::parse_doc(html_doc)?)
}

pub fn run<W: Write>(opts: &RunOptions, fetcher: &dyn Fetch, out: &mut W) -> Result<RunSummary> {
    let html_doc = load_page(&opts.source, fetcher)?;
    let dataset = dh_tables::parse_doc(&html_doc)?;
    info!("{} robots on the page", dataset.len());

    match opts.action {
        Action::ListRobots => {
            for name in dataset.keys() {
                writeln!(out, "{name}")?;
            }
        }
        Action::Render => {
            for doc in render_dataset(&dataset)? {
                writeln!(out, "{doc}")?;
            }
        }
    }
    out.flush()?;

    Ok(RunSummary { robots: dataset.keys().cloned().collect() })
}
