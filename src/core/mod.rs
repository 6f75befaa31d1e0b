//! Core Skonto types, rule configuration, validators, discount arithmetic
//! and edge-case classification.
//!
//! Every function here is pure: no clock, no I/O, no shared state. "Today" is
//! always passed in by the caller.

mod computation;
mod config;
pub mod currencies;
mod edge_case;
mod error;
mod types;
mod validation;

pub use computation::*;
pub use config::*;
pub use edge_case::*;
pub use error::*;
pub use types::*;
pub use validation::*;
