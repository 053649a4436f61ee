//! # Error Types
//!
//! Errors raised while setting up or rendering a raster.

use compact_sets::CompactError;
use thiserror::Error;

/// Errors that can occur while rasterizing a compact set.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RasterError {
    /// The window does not satisfy `x_min < x_max` and `y_min < y_max`.
    #[error("window must have positive width and height")]
    InvalidWindow,

    /// The raster would contain no pixels.
    #[error("raster needs at least one pixel per row")]
    EmptyRaster,

    /// A membership query failed.
    #[error("membership query failed: {0}")]
    Membership(#[from] CompactError),
}

/// Result type alias for raster operations.
pub type RasterResult<T> = Result<T, RasterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn membership_errors_convert() {
        let err: RasterError = CompactError::InvalidInterval.into();
        assert!(err.to_string().starts_with("membership query failed"));
    }
}
