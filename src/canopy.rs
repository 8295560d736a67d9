//! Synthetic canopy density grid
//!
//! Stand-in for a LiDAR canopy raster: a fixed 20x20 field around a base
//! density with a sine/cosine ripple and uniform jitter, clamped to
//! `[MIN_DENSITY, MAX_DENSITY]`.

use rand::Rng;
use serde::Serialize;

pub const GRID_SIZE: usize = 20;
pub const MIN_DENSITY: f64 = 0.1;
pub const MAX_DENSITY: f64 = 1.0;

const JITTER: f64 = 0.15;
const RIPPLE: f64 = 0.1;
const ROW_FREQ: f64 = 0.8;
const COL_FREQ: f64 = 0.6;

/// Row-major `GRID_SIZE` x `GRID_SIZE` density values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CanopyGrid {
    cells: Vec<f64>,
}

impl CanopyGrid {
    /// Returns `None` unless exactly `GRID_SIZE * GRID_SIZE` cells are given.
    pub fn from_cells(cells: Vec<f64>) -> Option<Self> {
        (cells.len() == GRID_SIZE * GRID_SIZE).then_some(Self { cells })
    }

    pub fn filled(value: f64) -> Self {
        Self {
            cells: vec![value; GRID_SIZE * GRID_SIZE],
        }
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < GRID_SIZE && col < GRID_SIZE {
            Some(self.cells[row * GRID_SIZE + col])
        } else {
            None
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.cells.chunks(GRID_SIZE)
    }

    pub fn cells(&self) -> &[f64] {
        &self.cells
    }

    pub fn mean(&self) -> f64 {
        self.cells.iter().sum::<f64>() / self.cells.len() as f64
    }
}

/// Generates a canopy grid from `rng`.
///
/// `_acreage` is accepted for call-site compatibility but has no effect on
/// the grid; size and resolution are fixed.
pub fn generate_canopy_grid<R: Rng>(
    _acreage: f64,
    base_density: f64,
    rng: &mut R,
) -> CanopyGrid {
    let mut cells = Vec::with_capacity(GRID_SIZE * GRID_SIZE);
    for r in 0..GRID_SIZE {
        let row_wave = (r as f64 * ROW_FREQ).sin() * RIPPLE;
        for c in 0..GRID_SIZE {
            let col_wave = (c as f64 * COL_FREQ).cos() * RIPPLE;
            let jitter: f64 = rng.gen_range(-JITTER..JITTER);
            let value = base_density + jitter + row_wave + col_wave;
            cells.push(value.clamp(MIN_DENSITY, MAX_DENSITY));
        }
    }
    CanopyGrid { cells }
}

/// Unseeded variant backed by the thread-local RNG; never reproducible.
pub fn generate_canopy_grid_unseeded(acreage: f64, base_density: f64) -> CanopyGrid {
    generate_canopy_grid(acreage, base_density, &mut rand::thread_rng())
}

/// Cell value as a whole percentage, for heatmap tooltips.
pub fn cell_pct(value: f64) -> u32 {
    (value * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn in_bounds(grid: &CanopyGrid) -> bool {
        grid.cells()
            .iter()
            .all(|v| (MIN_DENSITY..=MAX_DENSITY).contains(v))
    }

    #[test]
    fn grid_is_fixed_size() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let grid = generate_canopy_grid(74.0, 0.86, &mut rng);
        assert_eq!(grid.cells().len(), GRID_SIZE * GRID_SIZE);
        assert_eq!(grid.rows().count(), GRID_SIZE);
        assert!(grid.rows().all(|row| row.len() == GRID_SIZE));
    }

    #[test]
    fn cells_stay_in_bounds_at_extremes() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        for density in [-1.0, 0.0, 0.1, 0.5, 0.86, 1.0, 2.0] {
            let grid = generate_canopy_grid(10.0, density, &mut rng);
            assert!(in_bounds(&grid), "density {density} escaped bounds");
        }
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let a = generate_canopy_grid(105.0, 0.74, &mut ChaCha8Rng::seed_from_u64(3));
        let b = generate_canopy_grid(105.0, 0.74, &mut ChaCha8Rng::seed_from_u64(3));
        assert_eq!(a, b);
    }

    #[test]
    fn unseeded_grids_differ_but_respect_bounds() {
        let a = generate_canopy_grid_unseeded(74.0, 0.6);
        let b = generate_canopy_grid_unseeded(74.0, 0.6);
        assert_ne!(a, b);
        assert!(in_bounds(&a) && in_bounds(&b));
    }

    #[test]
    fn acreage_has_no_effect() {
        let a = generate_canopy_grid(1.0, 0.5, &mut ChaCha8Rng::seed_from_u64(11));
        let b = generate_canopy_grid(5_000.0, 0.5, &mut ChaCha8Rng::seed_from_u64(11));
        assert_eq!(a, b);
    }

    #[test]
    fn first_cell_follows_ripple_formula() {
        // r = 0, c = 0: sin(0) = 0, cos(0) = 1, so value = base + jitter + 0.1
        let grid = generate_canopy_grid(1.0, 0.5, &mut ChaCha8Rng::seed_from_u64(5));
        let v = grid.get(0, 0).unwrap();
        assert!(v >= 0.5 + RIPPLE - JITTER && v <= 0.5 + RIPPLE + JITTER);
    }

    #[test]
    fn from_cells_checks_shape() {
        assert!(CanopyGrid::from_cells(vec![0.5; 10]).is_none());
        let grid = CanopyGrid::from_cells(vec![0.5; GRID_SIZE * GRID_SIZE]).unwrap();
        assert!((grid.mean() - 0.5).abs() < 1e-12);
        assert_eq!(grid.get(GRID_SIZE, 0), None);
        assert_eq!(cell_pct(0.864), 86);
    }
}
