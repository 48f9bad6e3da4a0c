// src/render/macaulay.rs
// Macaulay2 assignments. The last statement has no trailing newline;
// the code fence in `finalize` supplies it.

use crate::config::consts::JOINTS;
use crate::kinematics::NumericJointSeries;
use super::value;

pub fn macaulay2_block(s: &NumericJointSeries) -> String {
    [
        format!("dof := {JOINTS};"),
        assign("alpha", &s.alpha),
        assign("r", &s.r),
        assign("d", &s.d),
        assign("theta", &s.theta),
        s!("dhParams := {alpha, r, d, theta};"),
    ]
    .join("\n")
}

/// `name := {v1, v2, …};`
fn assign(name: &str, values: &[f64]) -> String {
    let list: Vec<String> = values.iter().copied().map(value).collect();
    format!("{name} := {{{}}};", list.join(", "))
}
