//! Spatial Index Module
//!
//! Broad-phase lookup of static obstacles. The collision resolver only ever
//! asks one question ("which obstacle, if any, overlaps this box?"), so the
//! index trait is that single query. Implementations must agree with a
//! linear scan: when several obstacles overlap, the lowest index is reported.
//!
//! - `[Aabb]` / `Vec<Aabb>` - linear scan, O(n) per query
//! - [`UniformGrid`] - sparse XZ bucket grid, O(cells touched) per query

use std::collections::HashMap;

use glam::Vec3;

use super::aabb::Aabb;

/// Broad-phase query interface over a fixed set of obstacles.
pub trait SpatialIndex {
    /// Returns the index of the lowest-numbered obstacle overlapping `query`.
    fn first_overlap(&self, query: &Aabb) -> Option<usize>;

    /// Returns `true` if any obstacle overlaps `query`.
    fn overlaps_any(&self, query: &Aabb) -> bool {
        self.first_overlap(query).is_some()
    }
}

impl SpatialIndex for [Aabb] {
    fn first_overlap(&self, query: &Aabb) -> Option<usize> {
        self.iter().position(|aabb| aabb.intersects(query))
    }
}

impl SpatialIndex for Vec<Aabb> {
    fn first_overlap(&self, query: &Aabb) -> Option<usize> {
        self.as_slice().first_overlap(query)
    }
}

impl<T: SpatialIndex + ?Sized> SpatialIndex for &T {
    fn first_overlap(&self, query: &Aabb) -> Option<usize> {
        (**self).first_overlap(query)
    }
}

/// Upper bound on the cells a single obstacle may be registered in.
pub const MAX_CELLS_PER_OBSTACLE: u64 = 4096;

/// Sparse uniform grid over the horizontal (XZ) plane.
///
/// Every obstacle is registered in each cell its footprint touches. Walls are
/// full-height, so Y is not bucketed; the exact overlap test still checks all
/// three axes.
///
/// # Coordinate System
///
/// Cell `(i, j)` covers `x in [i*cell, (i+1)*cell)` and
/// `z in [j*cell, (j+1)*cell)`. Boxes lying exactly on a cell boundary are
/// registered in both neighbours, which keeps closed-interval touching
/// consistent with the linear scan.
#[derive(Debug, Clone)]
pub struct UniformGrid {
    cell_size: f32,
    obstacles: Vec<Aabb>,
    cells: HashMap<(i32, i32), Vec<usize>>,
}

impl UniformGrid {
    /// Builds a grid over `obstacles` with square cells of `cell_size`.
    ///
    /// A non-positive or non-finite `cell_size` falls back to 1.0; config
    /// validation rejects such values before they get here.
    pub fn new(cell_size: f32, obstacles: impl IntoIterator<Item = Aabb>) -> Self {
        let cell_size = if cell_size.is_finite() && cell_size > 0.0 {
            cell_size
        } else {
            1.0
        };
        let mut grid = Self {
            cell_size,
            obstacles: Vec::new(),
            cells: HashMap::new(),
        };
        for aabb in obstacles {
            grid.insert(aabb);
        }
        grid
    }

    /// Appends an obstacle; its index is the previous `len()`.
    pub fn insert(&mut self, aabb: Aabb) -> usize {
        let index = self.obstacles.len();
        self.obstacles.push(aabb);
        let (lo, hi) = self.cell_range(&aabb);
        for i in lo.0..=hi.0 {
            for j in lo.1..=hi.1 {
                self.cells.entry((i, j)).or_default().push(index);
            }
        }
        index
    }

    #[inline]
    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    /// Number of cells `aabb` would be registered in at `cell_size`.
    ///
    /// Saturates at `u64::MAX`; a NaN extent also reports `u64::MAX`.
    pub fn cells_spanned(cell_size: f32, aabb: &Aabb) -> u64 {
        let cell = f64::from(cell_size);
        let span = |lo: f32, hi: f32| {
            let cells = (f64::from(hi) / cell).floor() - (f64::from(lo) / cell).floor() + 1.0;
            cells.max(1.0)
        };
        let (min, max) = (aabb.min(), aabb.max());
        let total = span(min.x, max.x) * span(min.z, max.z);
        if total.is_nan() { u64::MAX } else { total as u64 }
    }

    /// Number of non-empty cells.
    pub fn occupied_cells(&self) -> usize {
        self.cells.len()
    }

    fn cell_of(&self, p: Vec3) -> (i32, i32) {
        (
            (p.x / self.cell_size).floor() as i32,
            (p.z / self.cell_size).floor() as i32,
        )
    }

    fn cell_range(&self, aabb: &Aabb) -> ((i32, i32), (i32, i32)) {
        (self.cell_of(aabb.min()), self.cell_of(aabb.max()))
    }
}

impl SpatialIndex for UniformGrid {
    fn first_overlap(&self, query: &Aabb) -> Option<usize> {
        let (lo, hi) = self.cell_range(query);
        let mut best: Option<usize> = None;
        for i in lo.0..=hi.0 {
            for j in lo.1..=hi.1 {
                let Some(bucket) = self.cells.get(&(i, j)) else {
                    continue;
                };
                for &index in bucket {
                    if best.is_some_and(|b| index >= b) {
                        continue;
                    }
                    if self.obstacles[index].intersects(query) {
                        best = Some(index);
                    }
                }
            }
        }
        best
    }
}
