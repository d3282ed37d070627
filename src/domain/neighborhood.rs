//! Square-window neighborhood averaging on the torus.

use super::Grid;

/// Radius of the 3x3 "near" neighborhood.
pub const NEAR_RADIUS: usize = 1;

/// Radius of the 7x7 "distant" neighborhood.
pub const DISTANT_RADIUS: usize = 3;

/// Number of cells visited for a radius: the full window minus its center.
pub const fn window_len(radius: usize) -> usize {
    let side = 2 * radius + 1;
    side * side - 1
}

/// Mean state of the `(2r+1)^2` window around (x, y), center excluded.
///
/// Offsets wrap through the grid, so on grids narrower than the window a
/// cell is visited once per offset that lands on it. A radius of 0 has no
/// cells to visit and averages to 0.
pub fn average(grid: &Grid, x: isize, y: isize, radius: usize) -> f32 {
    if radius == 0 {
        return 0.0;
    }
    let r = radius as isize;
    let (x, y) = grid.wrap(x, y);

    let sum: f32 = (-r..=r)
        .flat_map(|dx| (-r..=r).map(move |dy| (dx, dy)))
        .filter(|&(dx, dy)| dx != 0 || dy != 0)
        .map(|(dx, dy)| grid.get(x + dx, y + dy))
        .sum();

    sum / window_len(radius) as f32
}

/// The two window radii the simulator combines.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Radii {
    pub near: usize,
    pub distant: usize,
}

impl Radii {
    pub const fn new(near: usize, distant: usize) -> Self {
        Self { near, distant }
    }

    /// Unweighted mean of the near and distant averages at (x, y)
    pub fn combined_average(&self, grid: &Grid, x: isize, y: isize) -> f32 {
        let near = average(grid, x, y, self.near);
        let distant = average(grid, x, y, self.distant);
        (near + distant) / 2.0
    }
}

impl Default for Radii {
    fn default() -> Self {
        Self::new(NEAR_RADIUS, DISTANT_RADIUS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::grid::ALIVE;

    #[test]
    fn test_window_sizes() {
        assert_eq!(window_len(NEAR_RADIUS), 8);
        assert_eq!(window_len(DISTANT_RADIUS), 48);
    }

    #[test]
    fn test_center_is_excluded() {
        let mut grid = Grid::new(20, 20).unwrap();
        grid.set(10, 10, ALIVE);
        assert_eq!(average(&grid, 10, 10, 1), 0.0);
        assert_eq!(average(&grid, 10, 10, 3), 0.0);
    }

    #[test]
    fn test_full_neighborhood_averages_to_one() {
        let mut grid = Grid::new(20, 20).unwrap();
        for x in 0..20 {
            for y in 0..20 {
                grid.set(x, y, ALIVE);
            }
        }
        assert_eq!(average(&grid, 0, 0, 1), 1.0);
        assert_eq!(average(&grid, 0, 0, 3), 1.0);
    }

    #[test]
    fn test_single_neighbor_weight() {
        let mut grid = Grid::new(20, 20).unwrap();
        grid.set(5, 6, ALIVE);
        assert_eq!(average(&grid, 5, 5, 1), 1.0 / 8.0);
        assert_eq!(average(&grid, 5, 5, 3), 1.0 / 48.0);
        // Outside the near window but inside the distant one
        assert_eq!(average(&grid, 5, 3, 1), 0.0);
        assert_eq!(average(&grid, 5, 3, 3), 1.0 / 48.0);
    }

    #[test]
    fn test_window_wraps_across_corner() {
        let mut grid = Grid::new(10, 10).unwrap();
        grid.set(9, 9, ALIVE);
        assert_eq!(average(&grid, 0, 0, 1), 1.0 / 8.0);
    }

    #[test]
    fn test_small_grid_counts_wrapped_copies() {
        // On 3x3 the 7x7 window lands on (1, 1) at offsets {-3, 0, 3}^2,
        // and the center offset is the only one skipped.
        let mut grid = Grid::new(3, 3).unwrap();
        grid.set(1, 1, ALIVE);
        assert!((average(&grid, 1, 1, 3) - 8.0 / 48.0).abs() < 1e-6);
    }

    #[test]
    fn test_extreme_anchor_matches_reduced_anchor() {
        let mut grid = Grid::new(100, 100).unwrap();
        grid.set(8, 92, ALIVE);
        grid.set(6, 93, 0.5);
        for radius in [1, 3] {
            let extreme = average(&grid, isize::MAX, isize::MIN, radius);
            assert_eq!(extreme, average(&grid, 7, 92, radius));
            assert!(extreme > 0.0);
        }
        assert_eq!(average(&grid, isize::MIN, isize::MAX, 1), average(&grid, 92, 7, 1));
    }

    #[test]
    fn test_zero_radius_is_empty() {
        let grid = Grid::new(4, 4).unwrap();
        assert_eq!(average(&grid, 0, 0, 0), 0.0);
    }

    #[test]
    fn test_combined_average() {
        let mut grid = Grid::new(20, 20).unwrap();
        grid.set(5, 6, ALIVE);
        let combined = Radii::default().combined_average(&grid, 5, 5);
        assert!((combined - (1.0 / 8.0 + 1.0 / 48.0) / 2.0).abs() < 1e-6);
    }
}
