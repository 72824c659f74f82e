//! CLI command implementations.

pub mod check;
pub mod compare;
pub mod config;
