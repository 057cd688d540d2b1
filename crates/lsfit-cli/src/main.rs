use std::fmt::Write as _;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use log::{debug, error, info, LevelFilter};
use thiserror::Error;

use lsfit_core::{FitOptions, LinearRegression, NanPolicy, StatsError};

use crate::dataset::{Dataset, DatasetError};

mod dataset;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum NanPolicyArg {
    /// Let NaN and infinite values propagate into the fit
    Keep,
    /// Drop observations containing NaN or infinite values
    Drop,
    /// Reject input containing NaN or infinite values
    Error,
}

impl From<NanPolicyArg> for NanPolicy {
    fn from(arg: NanPolicyArg) -> Self {
        match arg {
            NanPolicyArg::Keep => NanPolicy::KeepNaN,
            NanPolicyArg::Drop => NanPolicy::DropNaN,
            NanPolicyArg::Error => NanPolicy::ErrorOnNaN,
        }
    }
}

/// Fit a line to paired samples and predict new points
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// YAML dataset file with `xs`, `ys` and optional `predict`
    #[arg(short, long)]
    data: Option<String>,

    /// Comma-separated x values
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    xs: Vec<f64>,

    /// Comma-separated y values
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    ys: Vec<f64>,

    /// Comma-separated x values to predict
    #[arg(short, long, value_delimiter = ',', allow_hyphen_values = true)]
    predict: Vec<f64>,

    /// Handling of NaN and infinite observations
    #[arg(long, value_enum, default_value_t = NanPolicyArg::Keep)]
    nan_policy: NanPolicyArg,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("Failed to initialize logger: {0}")]
    Logger(#[from] log::SetLoggerError),

    #[error(transparent)]
    Dataset(#[from] DatasetError),

    #[error("Fit failed: {0}")]
    Fit(#[from] StatsError),
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), CliError> {
    simple_logger::SimpleLogger::new()
        .with_level(LevelFilter::Warn)
        .env()
        .init()?;

    let args = Args::parse();
    debug!("Args: {:?}", args);

    let dataset = Dataset::resolve(args.data.as_deref(), args.xs, args.ys, args.predict)?;
    info!(
        "Fitting {} observations, predicting {} points",
        dataset.xs.len(),
        dataset.predict.len()
    );

    let options = FitOptions {
        nan_policy: args.nan_policy.into(),
    };
    let mut model = LinearRegression::new();
    model.fit_with_options(&dataset.xs, &dataset.ys, &options)?;

    print!("{}", render_report(&model, &dataset.predict));
    Ok(())
}

/// Format the fitted parameters followed by one line per prediction
fn render_report(model: &LinearRegression, predict: &[f64]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Model parameters:");
    let _ = writeln!(out, "{}", model);
    for &x in predict {
        let _ = writeln!(out, "Prediction for X = {}: {}", x, model.predict(x));
    }
    out
}
