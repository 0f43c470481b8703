//! CLI library components for the synthetic test data generator.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
