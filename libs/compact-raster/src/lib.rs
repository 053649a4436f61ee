//! # Compact Raster
//!
//! Renders a planar [`CompactSet`](compact_sets::CompactSet) into a pixel
//! coverage bitmap. Each pixel is filled when its centre is a member at the
//! precision whose ball covers the whole pixel.
//!
//! ## Usage
//!
//! ```rust
//! use compact_raster::{Raster, Window};
//! use compact_sets::Path;
//! use exact_real::{Dyadic, Real};
//!
//! let window = Window::new(
//!     (Dyadic::zero(), Dyadic::one()),
//!     (Dyadic::zero(), Dyadic::one()),
//! ).unwrap();
//! let raster = Raster::new(window, 4).unwrap();
//! let diagonal = Path::new(|t: &Real| [t.clone(), t.clone()]);
//! let coverage = raster.render(&diagonal).unwrap();
//! assert_eq!(coverage.get(0, 3), Some(true));
//! assert_eq!(coverage.get(0, 0), Some(false));
//! ```

pub mod error;
pub mod raster;
pub mod window;

pub use error::{RasterError, RasterResult};
pub use raster::{Coverage, Raster};
pub use window::Window;
