use super::Grid;
use super::grid::ALIVE;

/// Represents a pattern that can be stamped onto the torus
#[derive(Clone, Debug)]
pub struct Pattern {
    pub cells: Vec<(isize, isize)>, // Offsets from the anchor, may be negative
}

impl Pattern {
    pub fn new(cells: Vec<(isize, isize)>) -> Self {
        Self { cells }
    }

    /// Set every pattern cell to alive relative to (x, y), wrapping at the edges
    pub fn place_on(&self, grid: &mut Grid, x: isize, y: isize) {
        let (x, y) = grid.wrap(x, y);
        for &(dx, dy) in &self.cells {
            grid.set(x + dx, y + dy, ALIVE);
        }
    }
}

/// Place a glider anchored at (x, y)
pub fn place_glider(grid: &mut Grid, x: isize, y: isize) {
    presets::glider().place_on(grid, x, y);
}

pub mod presets {
    use super::*;

    /// Glider - 2x2 body with a three-cell diagonal tail trailing up-left
    pub fn glider() -> Pattern {
        Pattern::new(
            vec![
                // Body
                (0, 0), (1, 0),
                (0, 1), (1, 1),
                // Tail
                (-1, -1),
                (-2, -2),
                (-3, -3),
            ],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alive_cells(grid: &Grid) -> Vec<(usize, usize)> {
        let mut cells: Vec<_> = grid
            .iter_cells()
            .filter(|&(_, _, s)| s == ALIVE)
            .map(|(x, y, _)| (x, y))
            .collect();
        cells.sort();
        cells
    }

    #[test]
    fn test_glider_has_seven_cells() {
        assert_eq!(presets::glider().cells.len(), 7);
    }

    #[test]
    fn test_place_glider_interior() {
        let mut grid = Grid::new(100, 100).unwrap();
        place_glider(&mut grid, 5, 5);

        let mut expected = vec![(5, 5), (6, 5), (5, 6), (6, 6), (4, 4), (3, 3), (2, 2)];
        expected.sort();
        assert_eq!(alive_cells(&grid), expected);
        assert_eq!(grid.live_count(), 7);
    }

    #[test]
    fn test_place_glider_wraps_at_origin() {
        let mut grid = Grid::new(100, 100).unwrap();
        place_glider(&mut grid, 0, 0);

        assert_eq!(grid.get(99, 99), ALIVE);
        assert_eq!(grid.get(98, 98), ALIVE);
        assert_eq!(grid.get(97, 97), ALIVE);
        assert_eq!(grid.alive_count(), 7);
    }

    #[test]
    fn test_place_glider_wraps_at_far_corner() {
        let mut grid = Grid::new(10, 10).unwrap();
        place_glider(&mut grid, 9, 9);
        assert_eq!(grid.get(0, 0), ALIVE);
        assert_eq!(grid.get(10, 9), ALIVE);
        assert_eq!(grid.alive_count(), 7);
    }

    #[test]
    fn test_place_glider_at_extreme_anchor() {
        // isize::MAX ≡ 7 and isize::MIN ≡ 92 (mod 100)
        let mut extreme = Grid::new(100, 100).unwrap();
        place_glider(&mut extreme, isize::MAX, isize::MIN);
        let mut reduced = Grid::new(100, 100).unwrap();
        place_glider(&mut reduced, 7, 92);
        assert_eq!(extreme, reduced);
        assert_eq!(extreme.alive_count(), 7);
    }

    #[test]
    fn test_overlapping_gliders_do_not_stack() {
        let mut grid = Grid::new(20, 20).unwrap();
        place_glider(&mut grid, 10, 10);
        place_glider(&mut grid, 10, 10);
        place_glider(&mut grid, 11, 11);
        assert!(grid.cells().iter().all(|&s| s == 0.0 || s == ALIVE));
        // The second anchor adds only (12,11), (11,12) and (12,12)
        assert_eq!(grid.alive_count(), 10);
    }
}
