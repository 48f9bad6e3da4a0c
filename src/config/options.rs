// src/config/options.rs
use std::path::PathBuf;
use super::consts::SOURCE_URL;

/// Where the page HTML comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Source {
    Url(String),
    File(PathBuf),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// Markdown + Macaulay2 section per robot.
    Render,
    /// Robot names only, one per line.
    ListRobots,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOptions {
    pub source: Source,
    pub action: Action,
    /// None → stdout.
    pub out: Option<PathBuf>,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            source: Source::Url(s!(SOURCE_URL)),
            action: Action::Render,
            out: None,
        }
    }
}
