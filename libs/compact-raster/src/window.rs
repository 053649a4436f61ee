//! Axis-aligned viewing window with exact bounds.

use exact_real::Dyadic;

use crate::error::{RasterError, RasterResult};

/// The rectangle `[x_min, x_max] × [y_min, y_max]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Window {
    x_min: Dyadic,
    x_max: Dyadic,
    y_min: Dyadic,
    y_max: Dyadic,
}

impl Window {
    /// # Errors
    ///
    /// [`RasterError::InvalidWindow`] unless both ranges are non-empty.
    pub fn new(x: (Dyadic, Dyadic), y: (Dyadic, Dyadic)) -> RasterResult<Self> {
        let ((x_min, x_max), (y_min, y_max)) = (x, y);
        if x_min >= x_max || y_min >= y_max {
            return Err(RasterError::InvalidWindow);
        }
        Ok(Self {
            x_min,
            x_max,
            y_min,
            y_max,
        })
    }

    pub fn x_min(&self) -> &Dyadic {
        &self.x_min
    }

    pub fn y_max(&self) -> &Dyadic {
        &self.y_max
    }

    pub fn span_x(&self) -> Dyadic {
        &self.x_max - &self.x_min
    }

    pub fn span_y(&self) -> Dyadic {
        &self.y_max - &self.y_min
    }
}
