//! C-compatible types for FFI boundary

use libc::c_char;
use lsfit_core::{FitOptions, NanPolicy, Parameters};

/// Error codes for FFI boundary
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    Success = 0,
    InvalidInput = 1,
    SingularMatrix = 2,
    DimensionMismatch = 3,
    NoValidData = 4,
    NonFiniteValue = 5,
    AllocationFailure = 6,
    InternalError = 99,
}

/// Error information for FFI
#[repr(C)]
pub struct LsfitError {
    pub code: ErrorCode,
    pub message: [c_char; 256],
}

impl LsfitError {
    pub fn success() -> Self {
        Self {
            code: ErrorCode::Success,
            message: [0; 256],
        }
    }

    pub fn set(&mut self, code: ErrorCode, msg: &str) {
        self.code = code;
        let bytes = msg.as_bytes();
        let len = bytes.len().min(255);
        for (i, &b) in bytes[..len].iter().enumerate() {
            self.message[i] = b as c_char;
        }
        self.message[len] = 0;
    }
}

/// Array of f64 values with validity mask for NULL handling
#[repr(C)]
pub struct DataArray {
    /// Pointer to data values
    pub data: *const f64,
    /// Validity bitmask: bit i is 1 if data[i] is valid, 0 if NULL
    /// Can be NULL if all values are valid
    pub validity: *const u8,
    /// Number of elements
    pub len: usize,
}

impl DataArray {
    /// Check if index i is valid (not NULL)
    ///
    /// # Safety
    /// Caller must ensure index is within bounds
    pub unsafe fn is_valid(&self, i: usize) -> bool {
        if self.validity.is_null() {
            return true;
        }
        let byte_idx = i / 8;
        let bit_idx = i % 8;
        ((*self.validity.add(byte_idx)) >> bit_idx) & 1 == 1
    }

    /// Convert to Vec<f64>, replacing NULL with NaN
    ///
    /// # Safety
    /// Caller must ensure pointers are valid and len is correct
    pub unsafe fn to_vec(&self) -> Vec<f64> {
        if self.data.is_null() {
            return Vec::new();
        }
        (0..self.len)
            .map(|i| {
                if self.is_valid(i) {
                    *self.data.add(i)
                } else {
                    f64::NAN
                }
            })
            .collect()
    }
}

/// Fitted line parameters
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearParams {
    pub slope: f64,
    pub intercept: f64,
}

impl From<Parameters> for LinearParams {
    fn from(params: Parameters) -> Self {
        Self {
            slope: params.slope,
            intercept: params.intercept,
        }
    }
}

/// Options for fitting (FFI version)
#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct FitOptionsFFI {
    /// 0 = keep NaN, 1 = drop NaN rows, 2 = error on NaN
    pub nan_policy: u8,
}

impl FitOptionsFFI {
    /// Convert to core options, `None` for an unknown policy code
    pub fn to_options(self) -> Option<FitOptions> {
        let nan_policy = match self.nan_policy {
            0 => NanPolicy::KeepNaN,
            1 => NanPolicy::DropNaN,
            2 => NanPolicy::ErrorOnNaN,
            _ => return None,
        };
        Some(FitOptions { nan_policy })
    }
}

/// Batch prediction result
#[repr(C)]
pub struct PredictResult {
    /// Pointer to predicted values
    pub values: *mut f64,
    /// Number of predicted values
    pub len: usize,
}

impl Default for PredictResult {
    fn default() -> Self {
        Self {
            values: std::ptr::null_mut(),
            len: 0,
        }
    }
}
