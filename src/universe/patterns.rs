/// A fixed shape the engine can stamp onto the grid
#[derive(Clone, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub width: u32,
    pub height: u32,
    /// (x, y) offsets of alive cells from the top-left corner
    pub cells: Vec<(u32, u32)>,
}

impl Pattern {
    /// Create a new pattern from alive cell coordinates
    pub fn new(name: &'static str, cells: Vec<(u32, u32)>) -> Self {
        let width = cells.iter().map(|(x, _)| *x).max().unwrap_or(0) + 1;
        let height = cells.iter().map(|(_, y)| *y).max().unwrap_or(0) + 1;
        Self { name, width, height, cells }
    }

    /// Is the offset (x, y) inside the pattern alive?
    pub fn is_alive(&self, x: u32, y: u32) -> bool {
        self.cells.contains(&(x, y))
    }
}

/// Glider - simplest spaceship, moves diagonally
pub fn glider() -> Pattern {
    Pattern::new(
        "Glider",
        vec![
            (1, 0),
            (2, 1),
            (0, 2), (1, 2), (2, 2),
        ],
    )
}

/// Pulsar - period 3 oscillator
pub fn pulsar() -> Pattern {
    Pattern::new(
        "Pulsar",
        vec![
            // Top
            (2, 0), (3, 0), (4, 0), (8, 0), (9, 0), (10, 0),
            // Upper middle
            (0, 2), (5, 2), (7, 2), (12, 2),
            (0, 3), (5, 3), (7, 3), (12, 3),
            (0, 4), (5, 4), (7, 4), (12, 4),
            // Center
            (2, 5), (3, 5), (4, 5), (8, 5), (9, 5), (10, 5),
            (2, 7), (3, 7), (4, 7), (8, 7), (9, 7), (10, 7),
            // Lower middle
            (0, 8), (5, 8), (7, 8), (12, 8),
            (0, 9), (5, 9), (7, 9), (12, 9),
            (0, 10), (5, 10), (7, 10), (12, 10),
            // Bottom
            (2, 12), (3, 12), (4, 12), (8, 12), (9, 12), (10, 12),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glider_bounds() {
        let g = glider();
        assert_eq!((g.width, g.height), (3, 3));
        assert_eq!(g.cells.len(), 5);
    }

    #[test]
    fn test_pulsar_is_symmetric() {
        let p = pulsar();
        assert_eq!((p.width, p.height), (13, 13));
        assert_eq!(p.cells.len(), 48);
        for &(x, y) in &p.cells {
            assert!(p.is_alive(12 - x, y), "not mirrored at ({}, {})", x, y);
            assert!(p.is_alive(y, x), "not transposed at ({}, {})", x, y);
        }
    }
}
