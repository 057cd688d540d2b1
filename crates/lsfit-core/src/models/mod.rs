//! Regression model implementations

mod linear;

pub use linear::LinearRegression;
