// src/config/consts.rs

// Net config
pub const SOURCE_URL: &str = "https://www.universal-robots.com/articles/ur/application-installation/\
dh-parameters-for-calculations-of-kinematics-and-dynamics/";
pub const USER_AGENT: &str = concat!("dh_scrape/", env!("CARGO_PKG_VERSION"));
pub const HTTP_TIMEOUT_SECS: u64 = 30;

// Page layout
pub const SUBHEADER_LABEL: &str = "Kinematics";

// Kinematics
pub const JOINTS: usize = 6;
pub const PI_SYMBOL: char = 'π';
