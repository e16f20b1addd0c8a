//! Reference engine hosted by the viewer binary.
//! Conway's rules (B3/S23) on a torus, cells packed one bit each,
//! row-major and LSB-first so the view can read the buffer directly.

mod patterns;

use life_canvas::Engine;
use life_canvas::domain::{bit_at, packed_len};
use std::fmt;

use rand::Rng;
use rayon::prelude::*;
use tracing::debug;

use patterns::Pattern;

/// Fraction of cells alive after a reset
pub const RESET_DENSITY: f64 = 0.3;

pub struct Universe {
    width: u32,
    height: u32,
    cells: Vec<u8>,
}

impl Universe {
    /// Create a universe with every cell dead
    pub fn empty(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            cells: vec![0; packed_len(width, height)],
        }
    }

    fn index(&self, row: u32, col: u32) -> usize {
        row as usize * self.width as usize + col as usize
    }

    pub fn get(&self, row: u32, col: u32) -> bool {
        bit_at(&self.cells, self.index(row, col))
    }

    pub fn set(&mut self, row: u32, col: u32, alive: bool) {
        let idx = self.index(row, col);
        let mask = 1u8 << (idx % 8);
        if alive {
            self.cells[idx / 8] |= mask;
        } else {
            self.cells[idx / 8] &= !mask;
        }
    }

    /// Count neighbors at (row, col) with toroidal wrapping
    fn live_neighbor_count(&self, row: u32, col: u32) -> u8 {
        let mut count = 0u8;
        for delta_row in [self.height - 1, 0, 1] {
            for delta_col in [self.width - 1, 0, 1] {
                if delta_row == 0 && delta_col == 0 {
                    continue;
                }
                let neighbor_row = (row + delta_row) % self.height;
                let neighbor_col = (col + delta_col) % self.width;
                count += self.get(neighbor_row, neighbor_col) as u8;
            }
        }
        count
    }

    /// Overwrite the pattern's bounding box centered on (row, col), wrapping at the edges
    fn stamp(&mut self, pattern: &Pattern, row: u32, col: u32) {
        debug!(pattern = pattern.name, row, col, "stamping pattern");
        let top = wrap_sub(row, pattern.height / 2, self.height);
        let left = wrap_sub(col, pattern.width / 2, self.width);

        for dy in 0..pattern.height {
            for dx in 0..pattern.width {
                let r = (top + dy) % self.height;
                let c = (left + dx) % self.width;
                self.set(r, c, pattern.is_alive(dx, dy));
            }
        }
    }

    fn randomize(&mut self) {
        let mut rng = rand::rng();
        self.cells.iter_mut().for_each(|b| *b = 0);
        for row in 0..self.height {
            for col in 0..self.width {
                if rng.random_bool(RESET_DENSITY) {
                    self.set(row, col, true);
                }
            }
        }
    }
}

/// One text line per row: `◻` alive, `◼` dead
impl fmt::Display for Universe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            for col in 0..self.width {
                let symbol = if self.get(row, col) { '◻' } else { '◼' };
                write!(f, "{}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// `(value - amount) mod modulus` without underflow
fn wrap_sub(value: u32, amount: u32, modulus: u32) -> u32 {
    (value + modulus - amount % modulus) % modulus
}

impl Engine for Universe {
    /// Create a universe seeded at random
    fn new(width: u32, height: u32) -> Self {
        let mut universe = Self::empty(width, height);
        universe.randomize();
        universe
    }

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn cells(&self) -> &[u8] {
        &self.cells
    }

    fn tick(&mut self) {
        let width = self.width;

        // Process each row in parallel
        let next_rows: Vec<Vec<bool>> = (0..self.height)
            .into_par_iter()
            .map(|row| {
                (0..width)
                    .map(|col| {
                        let alive = self.get(row, col);
                        match (alive, self.live_neighbor_count(row, col)) {
                            (true, 2 | 3) => true,
                            (false, 3) => true,
                            _ => false,
                        }
                    })
                    .collect()
            })
            .collect();

        let mut next = vec![0u8; self.cells.len()];
        for (i, alive) in next_rows.into_iter().flatten().enumerate() {
            if alive {
                next[i / 8] |= 1 << (i % 8);
            }
        }
        self.cells = next;
    }

    fn toggle_cell(&mut self, row: u32, col: u32) {
        debug!(row, col, "toggling cell");
        let alive = self.get(row, col);
        self.set(row, col, !alive);
    }

    fn put_glider(&mut self, row: u32, col: u32) {
        self.stamp(&patterns::glider(), row, col);
    }

    fn put_pulsar(&mut self, row: u32, col: u32) {
        self.stamp(&patterns::pulsar(), row, col);
    }

    fn reset(&mut self) {
        self.randomize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alive_cells(universe: &Universe) -> Vec<(u32, u32)> {
        let mut cells = Vec::new();
        for row in 0..universe.height {
            for col in 0..universe.width {
                if universe.get(row, col) {
                    cells.push((row, col));
                }
            }
        }
        cells
    }

    #[test]
    fn test_toggle_sets_packed_bit() {
        let mut universe = Universe::empty(8, 8);
        universe.toggle_cell(3, 4);

        assert_eq!(universe.cells()[3], 1 << 4);
        assert_eq!(alive_cells(&universe), vec![(3, 4)]);

        universe.toggle_cell(3, 4);
        assert!(alive_cells(&universe).is_empty());
    }

    #[test]
    fn test_blinker_oscillates() {
        let mut universe = Universe::empty(5, 5);
        universe.set(2, 1, true);
        universe.set(2, 2, true);
        universe.set(2, 3, true);

        universe.tick();
        assert_eq!(
            alive_cells(&universe),
            vec![(1, 2), (2, 2), (3, 2)],
            "after one tick:\n{}",
            universe
        );

        universe.tick();
        assert_eq!(
            alive_cells(&universe),
            vec![(2, 1), (2, 2), (2, 3)],
            "after two ticks:\n{}",
            universe
        );
    }

    #[test]
    fn test_display_draws_one_line_per_row() {
        let mut universe = Universe::empty(3, 2);
        universe.set(0, 1, true);
        universe.set(1, 2, true);

        assert_eq!(universe.to_string(), "◼◻◼\n◼◼◻\n");
    }

    #[test]
    fn test_neighbors_wrap_around() {
        let mut universe = Universe::empty(4, 4);
        universe.set(0, 0, true);
        universe.set(3, 3, true);
        universe.set(0, 3, true);

        assert_eq!(universe.live_neighbor_count(3, 0), 3);
    }

    #[test]
    fn test_glider_centered_on_target() {
        let mut universe = Universe::empty(10, 10);
        universe.put_glider(5, 5);

        assert_eq!(alive_cells(&universe), vec![(4, 5), (5, 6), (6, 4), (6, 5), (6, 6)]);
    }

    #[test]
    fn test_glider_overwrites_its_box() {
        let mut universe = Universe::empty(10, 10);
        universe.set(4, 4, true);
        universe.set(0, 0, true);
        universe.put_glider(5, 5);

        assert!(!universe.get(4, 4));
        assert!(universe.get(0, 0));
    }

    #[test]
    fn test_glider_wraps_at_corner() {
        let mut universe = Universe::empty(6, 6);
        universe.put_glider(0, 0);

        assert_eq!(alive_cells(&universe), vec![(0, 1), (1, 0), (1, 1), (1, 5), (5, 0)]);
    }

    #[test]
    fn test_pulsar_stamp() {
        let mut universe = Universe::empty(20, 20);
        universe.put_pulsar(10, 10);

        let cells = alive_cells(&universe);
        assert_eq!(cells.len(), 48);
        // Top arm of the pulsar sits six rows above the center
        assert!(universe.get(4, 6));
        assert!(universe.get(4, 14));
        assert!(!universe.get(10, 10));
    }

    #[test]
    fn test_reset_keeps_dimensions() {
        let mut universe = Universe::new(16, 12);
        universe.reset();
        assert_eq!((universe.width(), universe.height()), (16, 12));
        assert_eq!(universe.cells().len(), packed_len(16, 12));
    }

    #[test]
    fn test_wrap_sub() {
        assert_eq!(wrap_sub(0, 1, 10), 9);
        assert_eq!(wrap_sub(5, 6, 20), 19);
        assert_eq!(wrap_sub(7, 6, 20), 1);
    }
}
