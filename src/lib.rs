// src/lib.rs

#[macro_use]
pub mod macros;

pub mod cli;
pub mod config;
pub mod core;
pub mod data;
pub mod error;
pub mod file;
pub mod kinematics;
pub mod render;
pub mod runner;
pub mod specs;

pub use error::{ AngleError, Error, Result };
