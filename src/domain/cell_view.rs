//! Read-only decoding of the engine's bit-packed cell buffer.
//! One bit per cell, row-major, least-significant bit first within each byte.
//! A view borrows the buffer for the duration of a single repaint and is
//! dropped before the engine is called again.

/// Number of bytes needed to hold `width * height` packed cells
pub const fn packed_len(width: u32, height: u32) -> usize {
    (width as usize * height as usize).div_ceil(8)
}

/// Decode a single bit out of a packed buffer
#[inline]
pub fn bit_at(bytes: &[u8], index: usize) -> bool {
    (bytes[index / 8] >> (index % 8)) & 1 == 1
}

/// Borrowed view over a packed cell buffer
#[derive(Clone, Copy, Debug)]
pub struct CellView<'a> {
    bytes: &'a [u8],
    width: u32,
    height: u32,
}

impl<'a> CellView<'a> {
    /// Wrap a buffer reported by the engine.
    ///
    /// Panics if the buffer is shorter than the declared dimensions require;
    /// that means the engine and the view disagree on the grid size.
    pub fn new(bytes: &'a [u8], width: u32, height: u32) -> Self {
        let needed = packed_len(width, height);
        assert!(
            bytes.len() >= needed,
            "cell buffer holds {} bytes, {}x{} grid needs {}",
            bytes.len(),
            width,
            height,
            needed
        );
        Self { bytes, width, height }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Total number of cells covered by the view
    fn len(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Linear cell index for (row, col). Panics outside the grid.
    #[inline]
    pub fn index(&self, row: u32, col: u32) -> usize {
        assert!(
            row < self.height && col < self.width,
            "cell ({}, {}) out of range {}x{}",
            row,
            col,
            self.width,
            self.height
        );
        row as usize * self.width as usize + col as usize
    }

    /// Is the cell at linear `index` alive? Panics when `index >= len()`.
    #[inline]
    pub fn is_alive(&self, index: usize) -> bool {
        assert!(index < self.len(), "cell index {} out of range {}", index, self.len());
        bit_at(self.bytes, index)
    }

    #[inline]
    pub fn is_alive_at(&self, row: u32, col: u32) -> bool {
        self.is_alive(self.index(row, col))
    }

    /// Count alive cells, ignoring padding bits in the final byte
    pub fn live_count(&self) -> usize {
        let len = self.len();
        let full = len / 8;
        let mut count: usize = self.bytes[..full].iter().map(|b| b.count_ones() as usize).sum();
        let rest = len % 8;
        if rest > 0 {
            let mask = (1u8 << rest) - 1;
            count += (self.bytes[full] & mask).count_ones() as usize;
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_packed_len() {
        assert_eq!(packed_len(8, 8), 8);
        assert_eq!(packed_len(1, 1), 1);
        assert_eq!(packed_len(3, 3), 2);
        assert_eq!(packed_len(64, 64), 512);
        assert_eq!(packed_len(0, 10), 0);
    }

    #[test]
    fn test_decode_matches_bit_formula_exhaustive() {
        // Every byte a different pattern so misplaced bits show up
        let bytes: Vec<u8> = (0..8u8).map(|i| i.wrapping_mul(37) ^ 0xA5).collect();
        let view = CellView::new(&bytes, 8, 8);

        for i in 0..64 {
            let expected = ((bytes[i / 8] >> (i % 8)) & 1) == 1;
            assert_eq!(view.is_alive(i), expected, "Mismatch at index {}", i);
        }
    }

    #[test]
    fn test_lsb_first_order() {
        let bytes = [0b0000_0001u8, 0b1000_0000];
        let view = CellView::new(&bytes, 4, 4);

        assert!(view.is_alive(0));
        assert!(!view.is_alive(1));
        assert!(!view.is_alive(7));
        assert!(!view.is_alive(8));
        assert!(view.is_alive(15));
        assert!(view.is_alive_at(3, 3));
        assert!(view.is_alive_at(0, 0));
    }

    #[test]
    fn test_single_cell_row_col() {
        // Cell (3, 4) on an 8x8 grid is index 28: byte 3, bit 4
        let mut bytes = [0u8; 8];
        bytes[3] = 1 << 4;
        let view = CellView::new(&bytes, 8, 8);

        assert_eq!(view.index(3, 4), 28);
        for i in 0..64 {
            assert_eq!(view.is_alive(i), i == 28, "index {}", i);
        }
    }

    #[test]
    fn test_live_count_ignores_padding() {
        // 3x3 = 9 cells, second byte only has one meaningful bit
        let bytes = [0xFFu8, 0xFF];
        let view = CellView::new(&bytes, 3, 3);
        assert_eq!(view.live_count(), 9);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_index_out_of_range_is_fatal() {
        let bytes = [0u8; 2];
        let view = CellView::new(&bytes, 3, 3);
        view.is_alive(9);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_column_past_width_is_fatal() {
        // Only (1, 0) alive; (0, 4) must not wrap onto it
        let bytes = [0b0001_0000u8, 0];
        let view = CellView::new(&bytes, 4, 4);
        assert!(view.is_alive_at(1, 0));
        view.is_alive_at(0, 4);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_row_past_height_is_fatal() {
        let bytes = [0u8; 2];
        let view = CellView::new(&bytes, 4, 4);
        view.index(4, 0);
    }

    #[test]
    #[should_panic(expected = "cell buffer holds")]
    fn test_short_buffer_is_fatal() {
        let bytes = [0u8; 7];
        CellView::new(&bytes, 8, 8);
    }
}
