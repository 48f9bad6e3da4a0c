// src/kinematics/mod.rs
//! Numeric side of the pipeline: π-aware angle parsing and per-robot
//! parameter series. Nothing here touches HTML or output formatting.

pub mod angle;
pub mod ratio;
pub mod series;

pub use angle::angle_to_degrees;
pub use ratio::Ratio;
pub use series::{ list_parameters, NumericJointSeries };
