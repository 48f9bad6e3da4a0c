// src/data.rs
//
// Scraped DH data, exactly as read off the page.
//
// - RawJointParams: the four parameter strings of one joint row.
// - RobotParameterTable: joint label → params, in row order.
// - ScrapedDataset: robot name → table, in page order. Built once by
//   specs::dh_tables and read-only afterwards.

use indexmap::IndexMap;

/// One data row's parameters, verbatim. theta/alpha may be π expressions.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawJointParams {
    pub theta: String,
    pub r: String,
    pub d: String,
    pub alpha: String,
}

pub type RobotParameterTable = IndexMap<String, RawJointParams>;
pub type ScrapedDataset = IndexMap<String, RobotParameterTable>;

/// "Joint 3" for 3. Labels are 1-based.
pub fn joint_label(n: usize) -> String {
    format!("Joint {n}")
}
