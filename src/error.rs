// src/error.rs
//! Error types for the scrape → list → render pipeline.
//! Every variant is fatal to a run; nothing is isolated per robot.

use std::io;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// The page answered with anything other than 200.
    #[error("Failed to retrieve the page. Status code: {0}")]
    Status(u16),

    /// Transport failure: DNS, TLS, timeout, body read.
    #[error("HTTP request failed: {0}")]
    Http(#[from] ureq::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Bad command line.
    #[error("{0}")]
    Usage(String),

    /// A data row ran out of cells before `alpha`.
    #[error("row `{label}` under `{robot}` has {cells} cells, expected 5")]
    ShortRow { robot: String, label: String, cells: usize },

    /// A data row showed up before any robot heading row.
    #[error("row `{label}` appears before any robot heading")]
    RowWithoutRobot { label: String },

    #[error("`{robot}` has no `{joint}` entry")]
    MissingJoint { robot: String, joint: String },

    #[error("`{robot}` {joint}: {source}")]
    Angle {
        robot: String,
        joint: String,
        #[source]
        source: AngleError,
    },

    /// r or d is not a plain decimal.
    #[error("`{robot}` {joint}: `{value}` is not a number")]
    InvalidLength { robot: String, joint: String, value: String },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AngleError {
    #[error("`{0}` is not a rational multiple of π")]
    Coefficient(String),

    #[error("`{0}` divides by zero")]
    ZeroDenominator(String),

    #[error("`{0}` has more than one π")]
    RepeatedPi(String),

    #[error("`{0}` is not a decimal angle")]
    Decimal(String),
}
