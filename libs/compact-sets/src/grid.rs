//! Uniform grids over the unit parameter domain `[0, 1]^D`.

use exact_real::Dyadic;

/// The grid of points `i · 2^step` (`i = 0 ..= 2^-step`) in each axis of
/// `[0, 1]^D`. Both endpoints of every axis are included.
///
/// # Examples
/// ```
/// use compact_sets::grid::Mesh;
/// let mesh = Mesh::<2>::new(-1);
/// assert_eq!(mesh.len(), 9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mesh<const D: usize> {
    step: i64,
}

impl<const D: usize> Mesh<D> {
    /// A mesh of spacing `2^step`; positive steps are treated as `0`.
    pub fn new(step: i64) -> Self {
        Self { step: step.min(0) }
    }

    pub fn step(&self) -> i64 {
        self.step
    }

    /// Number of grid points along one axis.
    pub fn points_per_axis(&self) -> u64 {
        (1u64 << (-self.step).min(62)) + 1
    }

    pub fn len(&self) -> u64 {
        self.points_per_axis().saturating_pow(D as u32)
    }

    pub fn is_empty(&self) -> bool {
        D == 0
    }

    /// The grid points in row-major order, last axis fastest.
    pub fn points(&self) -> MeshPoints<D> {
        MeshPoints {
            step: self.step,
            per_axis: self.points_per_axis(),
            index: [0; D],
            done: D == 0,
        }
    }
}

/// Iterator over the points of a [`Mesh`].
#[derive(Debug, Clone)]
pub struct MeshPoints<const D: usize> {
    step: i64,
    per_axis: u64,
    index: [u64; D],
    done: bool,
}

impl<const D: usize> Iterator for MeshPoints<D> {
    type Item = [Dyadic; D];

    fn next(&mut self) -> Option<[Dyadic; D]> {
        if self.done {
            return None;
        }
        let point = self.index.map(|i| Dyadic::new(i, self.step));
        // advance like an odometer
        self.done = true;
        for axis in (0..D).rev() {
            self.index[axis] += 1;
            if self.index[axis] < self.per_axis {
                self.done = false;
                break;
            }
            self.index[axis] = 0;
        }
        Some(point)
    }
}
