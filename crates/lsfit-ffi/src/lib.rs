//! C FFI boundary for lsfit
//!
//! The estimator is exposed as an opaque handle created with
//! `lsfit_estimator_new` and released with `lsfit_estimator_free`.

mod types;

pub use types::*;

use lsfit_core::{LinearRegression, StatsError};
use std::panic::{catch_unwind, AssertUnwindSafe};

/// Convert StatsError to ErrorCode
fn error_to_code(err: &StatsError) -> ErrorCode {
    match err {
        StatsError::EmptyInput { .. } => ErrorCode::InvalidInput,
        StatsError::DimensionMismatch { .. } => ErrorCode::DimensionMismatch,
        StatsError::NoValidData => ErrorCode::NoValidData,
        StatsError::NonFiniteValue { .. } => ErrorCode::NonFiniteValue,
        StatsError::SingularMatrix => ErrorCode::SingularMatrix,
    }
}

/// Record an error if the caller provided an error slot
unsafe fn set_error(out_error: *mut LsfitError, code: ErrorCode, msg: &str) {
    if !out_error.is_null() {
        (*out_error).set(code, msg);
    }
}

/// Create a new, unfitted estimator (slope = 0, intercept = 0)
///
/// The returned handle must be released with `lsfit_estimator_free`.
#[no_mangle]
pub extern "C" fn lsfit_estimator_new() -> *mut LinearRegression {
    Box::into_raw(Box::new(LinearRegression::new()))
}

/// Release an estimator created by `lsfit_estimator_new`
///
/// # Safety
/// `handle` must be NULL or a pointer returned by `lsfit_estimator_new` that
/// has not been freed yet
#[no_mangle]
pub unsafe extern "C" fn lsfit_estimator_free(handle: *mut LinearRegression) {
    if handle.is_null() {
        return;
    }
    drop(Box::from_raw(handle));
}

/// Fit the estimator to paired samples
///
/// NULL entries in either array are treated as NaN and then handled according
/// to `options.nan_policy`.
///
/// # Safety
/// - `handle` must be a valid estimator handle
/// - `x` and `y` must be valid DataArrays
/// - `out_error` can be NULL if error details are not needed
///
/// # Returns
/// `true` on success, `false` on error (check `out_error` for details).
/// On error the estimator keeps its previous parameters.
#[no_mangle]
pub unsafe extern "C" fn lsfit_estimator_fit(
    handle: *mut LinearRegression,
    x: DataArray,
    y: DataArray,
    options: FitOptionsFFI,
    out_error: *mut LsfitError,
) -> bool {
    // Initialize error
    if !out_error.is_null() {
        *out_error = LsfitError::success();
    }

    if handle.is_null() {
        set_error(out_error, ErrorCode::InvalidInput, "handle is NULL");
        return false;
    }

    let opts = match options.to_options() {
        Some(opts) => opts,
        None => {
            set_error(
                out_error,
                ErrorCode::InvalidInput,
                &format!("Unknown NaN policy code: {}", options.nan_policy),
            );
            return false;
        }
    };

    let x_vec = x.to_vec();
    let y_vec = y.to_vec();
    let model = &mut *handle;

    let fit_result = catch_unwind(AssertUnwindSafe(|| {
        model.fit_with_options(&x_vec, &y_vec, &opts)
    }));

    match fit_result {
        Ok(Ok(())) => true,
        Ok(Err(e)) => {
            set_error(out_error, error_to_code(&e), &e.to_string());
            false
        }
        Err(_) => {
            log::error!("Panic while fitting linear estimator");
            set_error(
                out_error,
                ErrorCode::InternalError,
                "Internal panic in linear fit",
            );
            false
        }
    }
}

/// Predict a single value with the current parameters
///
/// # Safety
/// `handle` must be NULL or a valid estimator handle
///
/// # Returns
/// `slope * x + intercept`, or NaN if `handle` is NULL
#[no_mangle]
pub unsafe extern "C" fn lsfit_estimator_predict(handle: *const LinearRegression, x: f64) -> f64 {
    if handle.is_null() {
        return f64::NAN;
    }
    (*handle).predict(x)
}

/// Predict a batch of values with the current parameters
///
/// # Safety
/// - `handle` must be a valid estimator handle
/// - `x` must be a valid DataArray
/// - `out_result` must be a valid pointer; free it with `lsfit_free_predict_result`
/// - `out_error` can be NULL if error details are not needed
///
/// # Returns
/// `true` on success, `false` on error (check `out_error` for details)
#[no_mangle]
pub unsafe extern "C" fn lsfit_estimator_predict_batch(
    handle: *const LinearRegression,
    x: DataArray,
    out_result: *mut PredictResult,
    out_error: *mut LsfitError,
) -> bool {
    // Initialize error
    if !out_error.is_null() {
        *out_error = LsfitError::success();
    }

    if handle.is_null() {
        set_error(out_error, ErrorCode::InvalidInput, "handle is NULL");
        return false;
    }
    if out_result.is_null() {
        set_error(out_error, ErrorCode::InvalidInput, "out_result is NULL");
        return false;
    }

    let predictions = (*handle).predict_batch(&x.to_vec());
    let n = predictions.len();

    if n == 0 {
        *out_result = PredictResult::default();
        return true;
    }

    let values_ptr = libc::malloc(n * std::mem::size_of::<f64>()) as *mut f64;
    if values_ptr.is_null() {
        set_error(
            out_error,
            ErrorCode::AllocationFailure,
            "Failed to allocate predictions",
        );
        return false;
    }
    std::ptr::copy_nonoverlapping(predictions.as_ptr(), values_ptr, n);

    *out_result = PredictResult {
        values: values_ptr,
        len: n,
    };
    true
}

/// Free memory allocated by lsfit_estimator_predict_batch
///
/// # Safety
/// `result` must be a pointer to a PredictResult previously filled by
/// lsfit_estimator_predict_batch
#[no_mangle]
pub unsafe extern "C" fn lsfit_free_predict_result(result: *mut PredictResult) {
    if result.is_null() {
        return;
    }
    if !(*result).values.is_null() {
        libc::free((*result).values as *mut libc::c_void);
        (*result).values = std::ptr::null_mut();
    }
    (*result).len = 0;
}

/// Report the current slope and intercept
///
/// # Safety
/// - `handle` must be a valid estimator handle
/// - `out_params` must be a valid pointer
/// - `out_error` can be NULL if error details are not needed
///
/// # Returns
/// `true` on success, `false` on error (check `out_error` for details)
#[no_mangle]
pub unsafe extern "C" fn lsfit_estimator_params(
    handle: *const LinearRegression,
    out_params: *mut LinearParams,
    out_error: *mut LsfitError,
) -> bool {
    // Initialize error
    if !out_error.is_null() {
        *out_error = LsfitError::success();
    }

    if handle.is_null() {
        set_error(out_error, ErrorCode::InvalidInput, "handle is NULL");
        return false;
    }
    if out_params.is_null() {
        set_error(out_error, ErrorCode::InvalidInput, "out_params is NULL");
        return false;
    }

    *out_params = (*handle).parameters().into();
    true
}
