//! CLI library components for the AMR surveillance toolkit.

pub mod logging;
pub mod sample;
