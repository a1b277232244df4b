use crate::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH};
use crate::quirks::WrapMode;

const CELLS: usize = DISPLAY_WIDTH * DISPLAY_HEIGHT;

/// # FrameBuffer
/// 64x32 monochrome pixels stored row-major, one cell per pixel, each 0 or 1.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FrameBuffer {
    cells: [u8; CELLS],
}

impl FrameBuffer {
    pub fn new() -> Self {
        FrameBuffer { cells: [0; CELLS] }
    }

    pub fn clear(&mut self) {
        self.cells = [0; CELLS];
    }

    /// The pixel at `(x, y)`; coordinates must already be on the display.
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.cells[x + y * DISPLAY_WIDTH]
    }

    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.cells.chunks(DISPLAY_WIDTH)
    }

    /// XORs the pixel at `(x, y)` after wrapping the coordinates.
    /// Returns true if the pixel was erased.
    pub fn set_pixel(&mut self, x: i32, y: i32, wrap: WrapMode) -> bool {
        let (x, y) = match (
            wrap_axis(x, DISPLAY_WIDTH, wrap),
            wrap_axis(y, DISPLAY_HEIGHT, wrap),
        ) {
            (Some(x), Some(y)) => (x, y),
            _ => return false,
        };
        let cell = &mut self.cells[x + y * DISPLAY_WIDTH];
        *cell ^= 1;
        *cell == 0
    }

    /// XORs an 8-pixel-wide sprite onto the display with its top-left corner at `(x, y)`.
    /// Each byte of `sprite` is a row, most significant bit leftmost.
    /// Returns true if any pixel was erased.
    pub fn draw_sprite(&mut self, x: u8, y: u8, sprite: &[u8], wrap: WrapMode) -> bool {
        let mut collision = false;
        for (row, byte) in sprite.iter().enumerate() {
            for bit in 0..8 {
                if byte & (0x80 >> bit) != 0 {
                    collision |= self.set_pixel(
                        i32::from(x) + bit as i32,
                        i32::from(y) + row as i32,
                        wrap,
                    );
                }
            }
        }
        collision
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

fn wrap_axis(value: i32, span: usize, wrap: WrapMode) -> Option<usize> {
    let span = span as i32;
    let wrapped = match wrap {
        WrapMode::Modular => value.rem_euclid(span),
        WrapMode::SingleStep if value >= span => value - span,
        WrapMode::SingleStep if value < 0 => value + span,
        WrapMode::SingleStep => value,
    };
    if (0..span).contains(&wrapped) {
        Some(wrapped as usize)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_pixel_toggles() {
        let mut frame = FrameBuffer::new();
        assert!(!frame.set_pixel(3, 4, WrapMode::Modular));
        assert_eq!(frame.get(3, 4), 1);
        assert!(frame.set_pixel(3, 4, WrapMode::Modular));
        assert_eq!(frame.get(3, 4), 0);
    }

    #[test]
    fn test_set_pixel_on_lit_cell_erases_then_relights() {
        let mut frame = FrameBuffer::new();
        frame.set_pixel(0, 0, WrapMode::Modular);
        assert!(frame.set_pixel(0, 0, WrapMode::Modular));
        assert!(!frame.set_pixel(0, 0, WrapMode::Modular));
    }

    #[test]
    fn test_set_pixel_is_row_major() {
        let mut frame = FrameBuffer::new();
        frame.set_pixel(1, 2, WrapMode::Modular);
        assert_eq!(frame.cells()[1 + 2 * 64], 1);
        assert_eq!(frame.rows().nth(2).unwrap()[1], 1);
    }

    #[test]
    fn test_modular_wrap() {
        let mut frame = FrameBuffer::new();
        frame.set_pixel(64 + 64 + 5, 32 + 7, WrapMode::Modular);
        assert_eq!(frame.get(5, 7), 1);
        frame.set_pixel(-1, -1, WrapMode::Modular);
        assert_eq!(frame.get(63, 31), 1);
    }

    #[test]
    fn test_single_step_wrap() {
        let mut frame = FrameBuffer::new();
        frame.set_pixel(64 + 5, 32 + 7, WrapMode::SingleStep);
        assert_eq!(frame.get(5, 7), 1);
        // still off the display after one step
        assert!(!frame.set_pixel(64 + 64 + 5, 7, WrapMode::SingleStep));
        assert_eq!(frame.cells().iter().filter(|&&c| c == 1).count(), 1);
    }

    #[test]
    fn test_draw_sprite_msb_first() {
        let mut frame = FrameBuffer::new();
        let collision = frame.draw_sprite(2, 1, &[0b1010_0000], WrapMode::Modular);
        assert!(!collision);
        assert_eq!(frame.rows().nth(1).unwrap()[2..6], [1, 0, 1, 0]);
    }

    #[test]
    fn test_redrawing_a_sprite_erases_it() {
        let mut frame = FrameBuffer::new();
        let sprite = [0xF0, 0x90, 0x90, 0x90, 0xF0];
        assert!(!frame.draw_sprite(10, 10, &sprite, WrapMode::Modular));
        assert_eq!(frame.cells().iter().filter(|&&c| c == 1).count(), 14);
        assert!(frame.draw_sprite(10, 10, &sprite, WrapMode::Modular));
        assert!(frame.cells().iter().all(|&c| c == 0));
    }

    #[test]
    fn test_partial_overlap_collides_only_where_set() {
        let mut frame = FrameBuffer::new();
        frame.draw_sprite(0, 0, &[0b1100_0000], WrapMode::Modular);
        assert!(frame.draw_sprite(1, 0, &[0b1000_0000], WrapMode::Modular));
        assert_eq!(frame.rows().next().unwrap()[0..3], [1, 0, 0]);
        assert!(!frame.draw_sprite(5, 5, &[0b1000_0000], WrapMode::Modular));
    }

    #[test]
    fn test_sprite_wraps_around_the_right_edge() {
        let mut frame = FrameBuffer::new();
        frame.draw_sprite(62, 0, &[0xF0], WrapMode::Modular);
        assert_eq!(frame.rows().next().unwrap()[62..64], [1, 1]);
        assert_eq!(frame.rows().next().unwrap()[0..2], [1, 1]);
    }
}
