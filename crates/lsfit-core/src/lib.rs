//! lsfit-core: Simple linear regression estimator
//!
//! This crate provides a closed-form ordinary least squares fit of a single
//! predictor, designed to be used directly from Rust or via the FFI crate.

pub mod errors;
pub mod models;
pub mod types;

pub use errors::{StatsError, StatsResult};
pub use models::LinearRegression;
pub use types::*;
