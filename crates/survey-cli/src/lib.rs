//! CLI library components for the nurse survey normalizer.

pub mod config;
pub mod logging;
pub mod pipeline;
