//! CLI layer: command definitions, view projections, display formatting

pub mod commands;
pub mod display;
pub mod query;

pub use commands::{Cli, Commands};
pub use query::TaskQuery;
