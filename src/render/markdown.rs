// src/render/markdown.rs

use crate::config::consts::JOINTS;
use crate::kinematics::NumericJointSeries;
use super::value;

const HEADER: &str = "| i | r | d | alpha | theta |\n|---|---|---|-------|-------|\n";

/// Two header lines plus one row per joint; columns r, d, alpha, theta.
pub fn markdown_table(s: &NumericJointSeries) -> String {
    let mut out = s!(HEADER);
    for i in 0..JOINTS {
        out.push_str(&format!(
            "| {} |{}|{}|{}|{}|\n",
            i + 1,
            value(s.r[i]),
            value(s.d[i]),
            value(s.alpha[i]),
            value(s.theta[i]),
        ));
    }
    out
}
