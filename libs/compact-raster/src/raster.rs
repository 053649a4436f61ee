//! Pixel grid over a window and its coverage by a compact set.

use compact_sets::{CompactSet, Point};
use exact_real::{Dyadic, Real};
use log::debug;
use rayon::prelude::*;

use crate::error::{RasterError, RasterResult};
use crate::window::Window;

/// A grid of square pixels covering a [`Window`].
///
/// Row 0 is the top of the window.
#[derive(Debug, Clone)]
pub struct Raster {
    window: Window,
    width: u32,
    height: u32,
    precision: i64,
}

impl Raster {
    /// A raster `width` pixels wide; the height follows from the window's
    /// aspect ratio, rounded up.
    ///
    /// # Errors
    ///
    /// [`RasterError::EmptyRaster`] for a zero width,
    /// [`RasterError::InvalidWindow`] if the height does not fit a `u32`.
    pub fn new(window: Window, width: u32) -> RasterResult<Self> {
        if width == 0 {
            return Err(RasterError::EmptyRaster);
        }
        let span_x = window.span_x();
        let columns = Dyadic::from(u64::from(width));
        let height = Dyadic::div_ceil_to(&(&window.span_y() * &columns), &span_x, 0)
            .to_i64_floor()
            .and_then(|rows| u32::try_from(rows).ok())
            .ok_or(RasterError::InvalidWindow)?;
        let precision = covering_precision(&span_x, width);
        debug!("raster {width}x{height} sampled at 2^{precision}");
        Ok(Self {
            window,
            width,
            height,
            precision,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Membership precision used for every pixel.
    pub fn precision(&self) -> i64 {
        self.precision
    }

    /// The centre of pixel `(col, row)`.
    pub fn center(&self, col: u32, row: u32) -> Point<2> {
        let columns = Real::from(2 * i64::from(self.width));
        let half_pixel = Real::exact(self.window.span_x()) / columns;
        let x = Real::exact(self.window.x_min().clone())
            + &half_pixel * &Real::from(2 * i64::from(col) + 1);
        let y = Real::exact(self.window.y_max().clone())
            - &half_pixel * &Real::from(2 * i64::from(row) + 1);
        [x, y]
    }

    /// Tests every pixel centre for membership, one row per task.
    pub fn render<S>(&self, set: &S) -> RasterResult<Coverage>
    where
        S: CompactSet<2> + Sync,
    {
        let rows = (0..self.height)
            .into_par_iter()
            .map(|row| {
                (0..self.width)
                    .map(|col| {
                        set.member(&self.center(col, row), self.precision)
                            .map_err(RasterError::from)
                    })
                    .collect::<RasterResult<Vec<bool>>>()
            })
            .collect::<RasterResult<Vec<Vec<bool>>>>()?;
        let coverage = Coverage {
            width: self.width,
            height: self.height,
            cells: rows.into_iter().flatten().collect(),
        };
        debug!("rendered {} of {} pixels", coverage.filled(), coverage.cells.len());
        Ok(coverage)
    }
}

// Least p with 2^p >= pixel / sqrt(2), i.e. 2^(2p) >= pixel² / 2.
fn covering_precision(span_x: &Dyadic, width: u32) -> i64 {
    let squared = span_x * span_x;
    let denominator = Dyadic::from(2 * u64::from(width) * u64::from(width));
    let fits = |c: i64| &Dyadic::pow2(c) * &denominator >= squared;
    let (Some(top), Some(bottom)) = (squared.floor_log2(), denominator.floor_log2()) else {
        return 0;
    };
    let mut c = top - bottom - 1;
    while !fits(c) {
        c += 1;
    }
    (c + 1).div_euclid(2)
}

/// Which pixels of a [`Raster`] are covered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coverage {
    width: u32,
    height: u32,
    cells: Vec<bool>,
}

impl Coverage {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Whether pixel `(col, row)` is covered; `None` outside the raster.
    pub fn get(&self, col: u32, row: u32) -> Option<bool> {
        if col >= self.width || row >= self.height {
            return None;
        }
        let index = usize::try_from(u64::from(row) * u64::from(self.width) + u64::from(col)).ok()?;
        self.cells.get(index).copied()
    }

    /// Number of covered pixels.
    pub fn filled(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// One line per row, `#` for covered pixels and `.` otherwise.
    pub fn to_text(&self) -> String {
        let mut text = String::with_capacity(self.cells.len() + self.height as usize);
        for row in self.cells.chunks(self.width as usize) {
            for &cell in row {
                text.push(if cell { '#' } else { '.' });
            }
            text.push('\n');
        }
        text
    }
}
