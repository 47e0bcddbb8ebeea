//! Score history of aim-trainer stats files: extraction, grouping by
//! scenario, and a least-squares trend line per scenario.
//!
//! The desktop viewer in `main.rs` is a thin shell over this crate.

pub mod config;
pub mod data;
pub mod error;
pub mod state;

pub use data::extract::extract;
pub use data::regression::fit_line;
