//! Simple linear regression (single predictor, closed-form OLS)
//!
//! The slope and intercept are obtained from the normal equations in a single
//! pass over the samples:
//!
//! ```text
//! slope     = (n*Sxy - Sx*Sy) / (n*Sxx - Sx*Sx)
//! intercept = (Sy - slope*Sx) / n
//! ```

use std::fmt;

use log::{debug, warn};

use crate::errors::{StatsError, StatsResult};
use crate::types::{FitOptions, NanPolicy, Parameters};

/// Linear estimator holding the fitted line `y = slope * x + intercept`
///
/// A fresh estimator has both parameters at zero and predicts zero for every
/// input. Each successful [`fit`](Self::fit) replaces the parameter pair in
/// full; a failed fit leaves it untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LinearRegression {
    params: Parameters,
}

impl LinearRegression {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fit the model with the default options
    ///
    /// # Arguments
    /// * `xs` - Independent variable (n observations)
    /// * `ys` - Dependent variable (n observations)
    pub fn fit(&mut self, xs: &[f64], ys: &[f64]) -> StatsResult<()> {
        self.fit_with_options(xs, ys, &FitOptions::default())
    }

    /// Fit the model
    ///
    /// # Errors
    /// * `EmptyInput` / `DimensionMismatch` for malformed samples
    /// * `NonFiniteValue` / `NoValidData` depending on the NaN policy
    /// * `SingularMatrix` when all retained x values are identical
    pub fn fit_with_options(
        &mut self,
        xs: &[f64],
        ys: &[f64],
        options: &FitOptions,
    ) -> StatsResult<()> {
        let (params, n_used) = fit_parameters(xs, ys, options).map_err(|err| {
            warn!("Rejected linear fit over {} observations: {}", xs.len(), err);
            err
        })?;

        debug!(
            "Fitted linear model on {} of {} observations: slope={}, intercept={}",
            n_used,
            xs.len(),
            params.slope,
            params.intercept
        );

        self.params = params;
        Ok(())
    }

    /// Evaluate the fitted line at `x`
    pub fn predict(&self, x: f64) -> f64 {
        self.params.predict(x)
    }

    /// Evaluate the fitted line at every value of `xs`
    pub fn predict_batch(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.params.predict(x)).collect()
    }

    pub fn parameters(&self) -> Parameters {
        self.params
    }

    pub fn slope(&self) -> f64 {
        self.params.slope
    }

    pub fn intercept(&self) -> f64 {
        self.params.intercept
    }
}

impl From<Parameters> for LinearRegression {
    fn from(params: Parameters) -> Self {
        Self { params }
    }
}

impl fmt::Display for LinearRegression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.params, f)
    }
}

/// Running sums of the normal equations
#[derive(Debug, Default)]
struct Sums {
    n: usize,
    x: f64,
    y: f64,
    xy: f64,
    xx: f64,
    first_x: Option<f64>,
    x_varies: bool,
}

impl Sums {
    fn push(&mut self, x: f64, y: f64) {
        match self.first_x {
            None => self.first_x = Some(x),
            Some(first) if x != first => self.x_varies = true,
            Some(_) => {}
        }

        self.n += 1;
        self.x += x;
        self.y += y;
        self.xy += x * y;
        self.xx += x * x;
    }

    fn solve(&self) -> StatsResult<Parameters> {
        if self.n == 0 {
            return Err(StatsError::NoValidData);
        }
        if !self.x_varies {
            return Err(StatsError::SingularMatrix);
        }

        let n = self.n as f64;
        let denominator = n * self.xx - self.x * self.x;
        if denominator == 0.0 {
            return Err(StatsError::SingularMatrix);
        }

        let slope = (n * self.xy - self.x * self.y) / denominator;
        let intercept = (self.y - slope * self.x) / n;

        Ok(Parameters { slope, intercept })
    }
}

/// Validate the samples and compute the fitted parameters
///
/// Returns the parameters together with the number of observations used.
fn fit_parameters(
    xs: &[f64],
    ys: &[f64],
    options: &FitOptions,
) -> StatsResult<(Parameters, usize)> {
    // Validate inputs
    if xs.is_empty() {
        return Err(StatsError::EmptyInput { field: "x" });
    }
    if ys.is_empty() {
        return Err(StatsError::EmptyInput { field: "y" });
    }
    if xs.len() != ys.len() {
        return Err(StatsError::DimensionMismatch {
            x_len: xs.len(),
            y_len: ys.len(),
        });
    }

    if options.nan_policy == NanPolicy::ErrorOnNaN {
        check_finite(xs, "x")?;
        check_finite(ys, "y")?;
    }

    let drop_non_finite = options.nan_policy == NanPolicy::DropNaN;

    let mut sums = Sums::default();
    for (&x, &y) in xs.iter().zip(ys) {
        if drop_non_finite && !(x.is_finite() && y.is_finite()) {
            continue;
        }
        sums.push(x, y);
    }

    let params = sums.solve()?;
    Ok((params, sums.n))
}

fn check_finite(values: &[f64], field: &'static str) -> StatsResult<()> {
    match values.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(StatsError::NonFiniteValue { field, index }),
        None => Ok(()),
    }
}
