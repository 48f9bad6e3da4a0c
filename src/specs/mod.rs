// src/specs/mod.rs
//! # Scraping "specs" module
//!
//! Page-specific knowledge: *where the data lives in the HTML* and how to pull
//! it out. Each spec is pure parsing over a document string; fetching and
//! output are handled by `runner`.
//!
//! ## Conventions
//! - **Case-insensitive** tag detection through `core::html` blocks; no DOM.
//! - Cell text is normalized (tags stripped, entities decoded, whitespace
//!   collapsed) before any comparison.
//! - Specs should be testable **offline** against captured fixtures.
//!
//! ## Current specs
//! - `dh_tables`: robot DH parameter tables from the Universal Robots article.
pub mod dh_tables;
