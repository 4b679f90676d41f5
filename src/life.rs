//! Conway's Game of Life engine with toroidal wrapping.
//!
//! [`LifeGrid`] owns the current generation and a same-shaped scratch
//! generation. [`LifeGrid::advance_generation`] computes every cell's next
//! state from an immutable snapshot of the current cells, then replaces the
//! current generation in one step, so no cell's update can observe another
//! cell's freshly computed state. Cells that die during the pass are handed
//! to the [`FadeMap`](crate::fade::FadeMap) so the renderer can fade them
//! out.

use crate::fade::FadeMap;

/// The Diehard pattern, (x, y) from the top-left, placed for a 19x19 board.
///
/// On an open board Diehard dies out after ~130 generations; on this torus
/// the wrapped debris keeps churning, and the reseed schedule restarts the
/// pattern every 30 seconds either way.
pub const DIEHARD: [(usize, usize); 7] = [
    (13, 9),
    (7, 10),
    (8, 10),
    (8, 11),
    (12, 11),
    (13, 11),
    (14, 11),
];

/// The R-pentomino, (x, y) from the top-left, centered for a 19x19 board.
pub const R_PENTOMINO: [(usize, usize); 5] = [(9, 9), (10, 9), (8, 10), (9, 10), (9, 11)];

/// Conway's Game of Life board with toroidal wrapping.
#[derive(Clone, Copy)]
pub struct LifeGrid<const W: usize, const H: usize> {
    cells: [[bool; W]; H],
    scratch: [[bool; W]; H],
}

impl<const W: usize, const H: usize> LifeGrid<W, H> {
    /// Creates an empty board.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [[false; W]; H],
            scratch: [[false; W]; H],
        }
    }

    /// Whether the cell at (x, y) is alive.
    #[must_use]
    pub fn is_alive(&self, x: usize, y: usize) -> bool {
        self.cells[y][x]
    }

    /// Sets the cell at (x, y) alive.
    pub fn set_alive(&mut self, x: usize, y: usize) {
        self.cells[y][x] = true;
    }

    /// Clears the board and sets exactly the listed (x, y) cells alive.
    pub fn seed(&mut self, cells: &[(usize, usize)]) {
        self.cells = [[false; W]; H];
        for &(x, y) in cells {
            self.cells[y][x] = true;
        }
    }

    /// Advances one generation (B3/S23).
    ///
    /// Every cell that transitions alive→dead starts its fade in `fade_map`
    /// during this same pass. Surviving, newborn, and still-dead cells never
    /// touch the fade map.
    pub fn advance_generation(&mut self, fade_map: &mut FadeMap<W, H>) {
        for y in 0..H {
            for x in 0..W {
                let is_alive = self.cells[y][x];
                let live_neighbors = self.count_live_neighbors(x, y);

                // Conway's Game of Life rules:
                // 1. Any live cell with 2 or 3 live neighbors survives
                // 2. Any dead cell with exactly 3 live neighbors becomes alive
                // 3. All other cells die or stay dead
                let next_alive = match (is_alive, live_neighbors) {
                    (true, 2) | (true, 3) => true,
                    (false, 3) => true,
                    _ => false,
                };

                if is_alive && !next_alive {
                    fade_map.mark_dead(x, y);
                }
                self.scratch[y][x] = next_alive;
            }
        }

        self.cells = self.scratch;
    }

    /// Counts live neighbors of (x, y), wrapping around board edges
    /// (toroidal topology).
    fn count_live_neighbors(&self, x: usize, y: usize) -> u8 {
        let mut count = 0u8;

        for y_offset in [-1, 0, 1].iter().copied() {
            for x_offset in [-1, 0, 1].iter().copied() {
                // Skip the center cell
                if x_offset == 0 && y_offset == 0 {
                    continue;
                }

                // Wrap coordinates around board edges
                let neighbor_x = ((x as isize + x_offset).rem_euclid(W as isize)) as usize;
                let neighbor_y = ((y as isize + y_offset).rem_euclid(H as isize)) as usize;

                if self.cells[neighbor_y][neighbor_x] {
                    count += 1;
                }
            }
        }

        count
    }
}

impl<const W: usize, const H: usize> Default for LifeGrid<W, H> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(all(test, feature = "host"))]
mod host_tests;
