use std::fmt;

/// Fitted parameters of the line `y = slope * x + intercept`
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Parameters {
    /// Slope of the fitted line
    pub slope: f64,
    /// Intercept of the fitted line
    pub intercept: f64,
}

impl Parameters {
    pub fn new(slope: f64, intercept: f64) -> Self {
        Self { slope, intercept }
    }

    /// Evaluate the line at `x`
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

impl fmt::Display for Parameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Slope: {}", self.slope)?;
        write!(f, "Intercept: {}", self.intercept)
    }
}

/// Policy for handling NaN and infinite values in the samples
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NanPolicy {
    /// Keep non-finite values (they propagate through the fit)
    #[default]
    KeepNaN,
    /// Skip observations where either x or y is non-finite
    DropNaN,
    /// Error if any non-finite value is encountered (strict mode)
    ErrorOnNaN,
}

/// Options for fitting the linear estimator
#[derive(Debug, Clone, Default)]
pub struct FitOptions {
    /// How non-finite observations are treated
    pub nan_policy: NanPolicy,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_parameters_predict_zero() {
        let params = Parameters::default();
        assert_eq!(params.predict(0.0), 0.0);
        assert_eq!(params.predict(-42.5), 0.0);
        assert_eq!(params.predict(1e300), 0.0);
    }

    #[test]
    fn test_parameters_display() {
        let params = Parameters::new(-1.0, 6.0);
        assert_eq!(params.to_string(), "Slope: -1\nIntercept: 6");

        let params = Parameters::new(0.5, -2.25);
        assert_eq!(params.to_string(), "Slope: 0.5\nIntercept: -2.25");
    }

    #[test]
    fn test_default_nan_policy_keeps_values() {
        assert_eq!(FitOptions::default().nan_policy, NanPolicy::KeepNaN);
    }
}
