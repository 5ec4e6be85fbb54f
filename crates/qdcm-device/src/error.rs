//! Device-side error types.

use qdcm_lut::LutError;
use thiserror::Error;

/// Result alias for device operations.
pub type DeviceResult<T> = Result<T, DeviceError>;

/// Errors from payload construction and firmware decoding.
#[derive(Error, Debug)]
pub enum DeviceError {
    /// The firmware blob ends before the requested preset block.
    #[error("firmware table truncated: need {needed} bytes, got {len}")]
    FirmwareTruncated {
        /// Bytes required to reach the end of the preset block
        needed: usize,
        /// Actual blob length
        len: usize,
    },

    /// An underlying LUT operation failed.
    #[error("LUT error: {0}")]
    Lut(#[from] LutError),
}
