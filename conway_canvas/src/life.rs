// life.rs - Generation transition for the B3/S23 rule, no wraparound

use crate::grid::Grid;

#[rustfmt::skip]
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    ( 0, -1),          ( 0, 1),
    ( 1, -1), ( 1, 0), ( 1, 1),
];

/// Live cells among the up-to-8 neighbours of `(col, row)`. Positions past the
/// grid edge are skipped rather than wrapped.
pub fn live_neighbors(grid: &Grid, col: usize, row: usize) -> u8 {
    let mut count = 0;
    for &(dc, dr) in &NEIGHBOR_OFFSETS {
        let (Some(nc), Some(nr)) = (col.checked_add_signed(dc), row.checked_add_signed(dr)) else {
            continue;
        };
        if grid.get(nc, nr) {
            count += 1;
        }
    }
    count
}

/// Computes the next generation into a fresh grid; `grid` is left untouched.
pub fn next_generation(grid: &Grid) -> Grid {
    let mut next = Grid::new(grid.columns(), grid.rows());

    for (col, row, alive) in grid.iter() {
        #[rustfmt::skip]
        let next_state = match (alive, live_neighbors(grid, col, row)) {
            (true, 2) | (true, 3) => true, // Survival
            (false, 3)            => true, // Birth
            _                     => false, // Death or stays dead
        };
        next.set(col, row, next_state);
    }

    next
}
