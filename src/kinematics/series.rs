// src/kinematics/series.rs
// One robot's raw table → four parallel numeric sequences.

use log::debug;

use crate::config::consts::JOINTS;
use crate::data::{ joint_label, RobotParameterTable };
use crate::error::{ Error, Result };
use super::angle::angle_to_degrees;

/// theta/alpha in degrees, r/d as printed on the page. Index 0 is Joint 1.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NumericJointSeries {
    pub theta: [f64; JOINTS],
    pub r: [f64; JOINTS],
    pub d: [f64; JOINTS],
    pub alpha: [f64; JOINTS],
}

/// Look up "Joint 1".."Joint 6" and convert each. A missing label or an
/// unparsable value aborts with the robot and joint named in the error.
pub fn list_parameters(robot: &str, table: &RobotParameterTable) -> Result<NumericJointSeries> {
    let mut series = NumericJointSeries::default();

    for i in 0..JOINTS {
        let joint = joint_label(i + 1);
        let raw = table.get(&joint).ok_or_else(|| Error::MissingJoint {
            robot: s!(robot),
            joint: joint.clone(),
        })?;

        series.theta[i] = angle(robot, &joint, &raw.theta)?;
        series.r[i] = length(robot, &joint, &raw.r)?;
        series.d[i] = length(robot, &joint, &raw.d)?;
        series.alpha[i] = angle(robot, &joint, &raw.alpha)?;
    }

    debug!("{robot}: listed {JOINTS} joints");
    Ok(series)
}

fn angle(robot: &str, joint: &str, raw: &str) -> Result<f64> {
    angle_to_degrees(raw).map_err(|source| Error::Angle {
        robot: s!(robot),
        joint: s!(joint),
        source,
    })
}

fn length(robot: &str, joint: &str, raw: &str) -> Result<f64> {
    raw.trim().parse::<f64>().map_err(|_| Error::InvalidLength {
        robot: s!(robot),
        joint: s!(joint),
        value: s!(raw),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::RawJointParams;

    fn table(skip: Option<usize>) -> RobotParameterTable {
        (1..=JOINTS)
            .filter(|&n| Some(n) != skip)
            .map(|n| {
                let raw = RawJointParams {
                    theta: s!("0"),
                    r: format!("0.{n}"),
                    d: format!("{n}"),
                    alpha: if n % 2 == 0 { s!("π/2") } else { s!("0") },
                };
                (joint_label(n), raw)
            })
            .collect()
    }

    #[test]
    fn complete_table_lists_in_joint_order() {
        let s = list_parameters("Bot", &table(None)).unwrap();
        assert_eq!(s.r, [0.1, 0.2, 0.3, 0.4, 0.5, 0.6]);
        assert_eq!(s.d, [1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(s.alpha, [0.0, 90.0, 0.0, 90.0, 0.0, 90.0]);
        assert_eq!(s.theta, [0.0; JOINTS]);
    }

    #[test]
    fn row_order_on_the_page_does_not_matter() {
        let mut t = table(None);
        t.reverse();
        assert_eq!(list_parameters("Bot", &t).unwrap(), list_parameters("Bot", &table(None)).unwrap());
    }

    #[test]
    fn missing_joint_is_a_lookup_error() {
        match list_parameters("Bot", &table(Some(4))) {
            Err(Error::MissingJoint { robot, joint }) => {
                assert_eq!(robot, "Bot");
                assert_eq!(joint, "Joint 4");
            }
            other => panic!("expected MissingJoint, got {other:?}"),
        }
    }

    #[test]
    fn non_numeric_length_fails() {
        let mut t = table(None);
        t.get_mut("Joint 2").unwrap().d = s!("n/a");
        assert!(matches!(
            list_parameters("Bot", &t),
            Err(Error::InvalidLength { ref joint, ref value, .. }) if joint == "Joint 2" && value == "n/a"
        ));
    }

    #[test]
    fn bad_angle_names_the_joint() {
        let mut t = table(None);
        t.get_mut("Joint 6").unwrap().alpha = s!("abcπ");
        let err = list_parameters("Bot", &t).unwrap_err();
        assert!(matches!(err, Error::Angle { ref joint, .. } if joint == "Joint 6"));
        assert!(err.to_string().contains("abcπ"));
    }
}
