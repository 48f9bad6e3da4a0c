// src/render/mod.rs
//! Text output for one robot: a Markdown parameter table and a Macaulay2
//! block, assembled under a `## {name}` heading. Names and values are
//! written as-is, without Markdown escaping.

pub mod macaulay;
pub mod markdown;

pub use macaulay::macaulay2_block;
pub use markdown::markdown_table;

use crate::kinematics::NumericJointSeries;

/// Shortest round-trip form that always keeps a fractional part: `90.0`, `0.089`.
pub fn value(v: f64) -> String {
    format!("{v:?}")
}

/// Full Markdown section for one robot, ending in a newline.
pub fn finalize(name: &str, series: &NumericJointSeries) -> String {
    join!(
        "## ", name, "\n",
        "### Parameters\n",
        &markdown_table(series), "\n",
        "### Macaulay2 code\n",
        "```\n",
        &macaulay2_block(series), "\n",
        "```\n",
    )
}
