//! CLI library components for the consent code decoder.

pub mod batch;
pub mod logging;
