//! CLI command implementations.
//!
//! This module contains the implementation of each CLI command.

pub mod get;
pub mod random;
pub mod stats;
pub mod validate;
