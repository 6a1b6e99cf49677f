#![forbid(clippy::mod_module_files)]

pub mod cost;
pub mod error;
pub mod grid;
pub mod run_bounds;
pub mod search;
