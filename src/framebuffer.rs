use crate::{BUFFER_SIZE, HEIGHT, WIDTH};

/// Logical color of a monochrome pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    /// Pixel is dark.
    Black,
    /// Pixel is lit.
    White,
}

impl Color {
    pub fn inverse(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }
}

/// Packed one-bit-per-pixel buffer mirroring the controller's GDDRAM layout.
///
/// The buffer is organized in pages of 8 pixel rows: byte index is
/// `x + page * WIDTH`, and within a byte the LSB is the top row of the page.
/// `update` flushes it page by page, so this layout must stay byte-exact.
pub(crate) struct Framebuffer {
    bytes: [u8; BUFFER_SIZE],
}

impl Framebuffer {
    pub(crate) const fn new() -> Self {
        Self {
            bytes: [0; BUFFER_SIZE],
        }
    }

    /// Sets or clears one bit. Out-of-range coordinates are a silent no-op
    /// so partially off-screen shapes clip instead of failing.
    pub(crate) fn set_pixel(&mut self, x: u8, y: u8, color: Color) {
        if x >= WIDTH || y >= HEIGHT {
            return;
        }
        let index = x as usize + (y as usize >> 3) * WIDTH as usize;
        let mask = 1u8 << (y & 0x7);
        match color {
            Color::White => self.bytes[index] |= mask,
            Color::Black => self.bytes[index] &= !mask,
        }
    }

    #[cfg(test)]
    pub(crate) fn pixel(&self, x: u8, y: u8) -> Option<Color> {
        if x >= WIDTH || y >= HEIGHT {
            return None;
        }
        let index = x as usize + (y as usize >> 3) * WIDTH as usize;
        if self.bytes[index] & (1 << (y & 0x7)) != 0 {
            Some(Color::White)
        } else {
            Some(Color::Black)
        }
    }

    /// Byte-level fill; a uniformly colored display has every bit equal.
    pub(crate) fn fill(&mut self, byte: u8) {
        self.bytes.fill(byte);
    }

    pub(crate) fn clear(&mut self) {
        self.bytes.fill(0);
    }

    /// One page row of `WIDTH` bytes, the unit of a flush transmission.
    pub(crate) fn page(&self, page: u8) -> &[u8] {
        let start = page as usize * WIDTH as usize;
        &self.bytes[start..start + WIDTH as usize]
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_pixel_maps_to_page_layout() {
        let mut fb = Framebuffer::new();
        fb.set_pixel(0, 0, Color::White);
        assert_eq!(fb.as_bytes()[0], 0x01);

        fb.set_pixel(5, 9, Color::White);
        // Row 9 lives in page 1, bit 1.
        assert_eq!(fb.as_bytes()[5 + WIDTH as usize], 0x02);

        fb.set_pixel(127, 63, Color::White);
        assert_eq!(fb.as_bytes()[127 + 7 * WIDTH as usize], 0x80);
    }

    #[test]
    fn set_pixel_clears_bits() {
        let mut fb = Framebuffer::new();
        fb.fill(0xFF);
        fb.set_pixel(3, 2, Color::Black);
        assert_eq!(fb.as_bytes()[3], 0xFF & !(1 << 2));
        assert_eq!(fb.pixel(3, 2), Some(Color::Black));
        assert_eq!(fb.pixel(3, 3), Some(Color::White));
    }

    #[test]
    fn out_of_range_writes_leave_buffer_untouched() {
        let mut fb = Framebuffer::new();
        fb.set_pixel(WIDTH, 0, Color::White);
        fb.set_pixel(0, HEIGHT, Color::White);
        fb.set_pixel(255, 255, Color::White);
        assert!(fb.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn pages_partition_the_buffer_in_order() {
        let mut fb = Framebuffer::new();
        fb.set_pixel(0, 8, Color::White);
        assert_eq!(fb.page(1)[0], 0x01);
        assert!(fb.page(0).iter().all(|&b| b == 0));
        assert_eq!(fb.page(7).len(), WIDTH as usize);
    }
}
