//! Lexi - localization key harvester for `$L()`-style JavaScript apps
//!
//! Lexi scans an application's sources for localization calls, then keeps a
//! translator-facing `lexicon.json` and a runtime `strings.json` up to date for
//! every language the application supports.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Project configuration and harvest options
//! - `core`: Scan, extract, merge and write pipeline

pub mod cli;
pub mod config;
pub mod core;
