//! The pixel surface every program draws into.

use crate::color::Rgb565;

/// The board's VGA buffer: 320×240 visible, rows laid out 512 pixels apart.
pub const VISIBLE_WIDTH: usize = 320;
pub const VISIBLE_HEIGHT: usize = 240;
pub const ROW_STRIDE: usize = 512;

/// A `width × height` window onto a buffer whose rows are `stride` pixels
/// apart. The padding between `width` and `stride` is never written.
#[derive(Clone, Debug)]
pub struct PixelSurface {
    width: usize,
    height: usize,
    stride: usize,
    buffer: Vec<Rgb565>,
}

impl PixelSurface {
    /// Zero-initialised surface. `stride` below `width` is raised to it.
    pub fn new(width: usize, height: usize, stride: usize) -> Self {
        let stride = stride.max(width);
        Self {
            width,
            height,
            stride,
            buffer: vec![Rgb565::BLACK; stride * height],
        }
    }

    /// The geometry of the board's pixel buffer.
    pub fn board() -> Self {
        Self::new(VISIBLE_WIDTH, VISIBLE_HEIGHT, ROW_STRIDE)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Plots one pixel. Coordinates outside the visible window are ignored.
    pub fn write(&mut self, x: i32, y: i32, c: Rgb565) {
        if x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height {
            self.buffer[y as usize * self.stride + x as usize] = c;
        }
    }

    pub fn get(&self, x: i32, y: i32) -> Option<Rgb565> {
        if x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height {
            Some(self.buffer[y as usize * self.stride + x as usize])
        } else {
            None
        }
    }

    /// Paints every visible pixel, leaving the stride padding alone.
    pub fn fill(&mut self, c: Rgb565) {
        if self.width == 0 {
            return;
        }
        for row in self.buffer.chunks_mut(self.stride) {
            row[..self.width].fill(c);
        }
    }

    /// Visible part of row `y`.
    pub fn row(&self, y: usize) -> &[Rgb565] {
        let start = y * self.stride;
        &self.buffer[start..start + self.width]
    }

    /// The whole backing buffer, padding included.
    pub fn raw(&self) -> &[Rgb565] {
        &self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_width_surface_is_inert() {
        let mut s = PixelSurface::new(0, 4, 0);
        s.fill(Rgb565::RED);
        s.write(0, 0, Rgb565::RED);
        assert_eq!(s.get(0, 0), None);
        assert!(s.raw().is_empty());
    }

    #[test]
    fn stride_never_below_width() {
        let s = PixelSurface::new(10, 4, 3);
        assert_eq!(s.stride(), 10);
        assert_eq!(s.raw().len(), 40);
    }

    #[test]
    fn write_lands_on_stride_offset() {
        let mut s = PixelSurface::new(4, 3, 8);
        s.write(2, 1, Rgb565::RED);
        assert_eq!(s.raw()[8 + 2], Rgb565::RED);
        assert_eq!(s.get(2, 1), Some(Rgb565::RED));
    }

    #[test]
    fn out_of_range_writes_are_ignored() {
        let mut s = PixelSurface::new(4, 3, 8);
        let before = s.raw().to_vec();
        for (x, y) in [(-1, 0), (0, -1), (4, 0), (0, 3), (i32::MIN, i32::MAX), (7, 1)] {
            s.write(x, y, Rgb565::WHITE);
        }
        assert_eq!(s.raw(), &before[..]);
        assert_eq!(s.get(4, 0), None);
    }

    #[test]
    fn fill_skips_padding_and_is_idempotent() {
        let mut s = PixelSurface::new(4, 3, 8);
        s.fill(Rgb565::CYAN);
        let once = s.raw().to_vec();
        s.fill(Rgb565::CYAN);
        assert_eq!(s.raw(), &once[..]);

        for y in 0..3 {
            assert!(s.row(y).iter().all(|&c| c == Rgb565::CYAN));
            let pad = &s.raw()[y * 8 + 4..y * 8 + 8];
            assert!(pad.iter().all(|&c| c == Rgb565::BLACK));
        }
    }

    #[test]
    fn board_geometry() {
        let s = PixelSurface::board();
        assert_eq!((s.width(), s.height(), s.stride()), (320, 240, 512));
    }
}
