//! Drawing primitives rendering into the session framebuffer.
//!
//! Nothing here touches the bus; every primitive reduces to pixel writes
//! against the local buffer and takes effect on screen at the next
//! [`Ssd1306::update`]. Shapes partially outside the display clip silently.

use embedded_hal::i2c::I2c;

use crate::display::Ssd1306;
use crate::font::Font;
use crate::framebuffer::Color;
use crate::{Error, HEIGHT, WIDTH};

/// Digits of an `i32` in base 2 plus a sign.
const INT_BUF_LEN: usize = 33;

impl<I2C: I2c> Ssd1306<I2C> {
    /// Single buffer write with clipping and inversion mapping applied.
    /// Raster helpers work in `i32` so intermediate points may leave the
    /// display without wrapping.
    pub(crate) fn plot(&mut self, x: i32, y: i32, color: Color) {
        if x < 0 || y < 0 || x >= WIDTH as i32 || y >= HEIGHT as i32 {
            return;
        }
        let resolved = if self.inverted { color.inverse() } else { color };
        self.buffer.set_pixel(x as u8, y as u8, resolved);
    }

    /// Bresenham segment, endpoints inclusive.
    fn line(&mut self, mut x0: i32, mut y0: i32, x1: i32, y1: i32, color: Color) {
        let dx = (x1 - x0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let dy = -(y1 - y0).abs();
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.plot(x0, y0, color);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = err * 2;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }

    /// Draws one pixel. Out-of-bounds coordinates are tolerated silently so
    /// composed shapes can hang over the edge.
    pub fn draw_pixel(&mut self, x: u8, y: u8, color: Color) -> Result<(), Error<I2C::Error>> {
        self.ensure_init()?;
        self.plot(x as i32, y as i32, color);
        Ok(())
    }

    /// Draws a segment from (x0, y0) to (x1, y1), endpoints inclusive.
    pub fn draw_line(
        &mut self,
        x0: u8,
        y0: u8,
        x1: u8,
        y1: u8,
        color: Color,
    ) -> Result<(), Error<I2C::Error>> {
        self.ensure_init()?;
        self.line(x0 as i32, y0 as i32, x1 as i32, y1 as i32, color);
        Ok(())
    }

    /// Draws the rectangle outline with top-left corner (x, y), spanning
    /// w pixels right and h pixels down.
    pub fn draw_rect(
        &mut self,
        x: u8,
        y: u8,
        w: u8,
        h: u8,
        color: Color,
    ) -> Result<(), Error<I2C::Error>> {
        self.ensure_init()?;
        let (x, y, w, h) = (x as i32, y as i32, w as i32, h as i32);
        self.line(x, y, x + w, y, color);
        self.line(x, y + h, x + w, y + h, color);
        self.line(x, y, x, y + h, color);
        self.line(x + w, y, x + w, y + h, color);
        Ok(())
    }

    /// Draws a filled rectangle as h+1 horizontal segments.
    pub fn draw_filled_rect(
        &mut self,
        x: u8,
        y: u8,
        w: u8,
        h: u8,
        color: Color,
    ) -> Result<(), Error<I2C::Error>> {
        self.ensure_init()?;
        let (x, y, w, h) = (x as i32, y as i32, w as i32, h as i32);
        for i in 0..=h {
            self.line(x, y + i, x + w, y + i, color);
        }
        Ok(())
    }

    /// Midpoint circle outline centered at (x0, y0).
    pub fn draw_circle(
        &mut self,
        x0: u8,
        y0: u8,
        r: u16,
        color: Color,
    ) -> Result<(), Error<I2C::Error>> {
        self.ensure_init()?;
        let (xc, yc) = (x0 as i32, y0 as i32);
        let mut x = -(r as i32);
        let mut y = 0;
        let mut err = 2 - 2 * r as i32;

        loop {
            self.plot(xc - x, yc + y, color);
            self.plot(xc - y, yc - x, color);
            self.plot(xc + x, yc - y, color);
            self.plot(xc + y, yc + x, color);

            let e = err;
            if e > x {
                x += 1;
                err += x * 2 + 1;
            }
            if e <= y {
                y += 1;
                err += y * 2 + 1;
            }
            if x >= 0 {
                break;
            }
        }
        Ok(())
    }

    /// Filled circle from the same midpoint walk, connecting the symmetric
    /// point pairs with segments each step. The segments overlap, so the
    /// fill is an approximation rather than an exact disk; kept for
    /// compatibility with the outline variant's geometry.
    pub fn draw_filled_circle(
        &mut self,
        x0: u8,
        y0: u8,
        r: u16,
        color: Color,
    ) -> Result<(), Error<I2C::Error>> {
        self.ensure_init()?;
        let (xc, yc) = (x0 as i32, y0 as i32);
        let mut x = -(r as i32);
        let mut y = 0;
        let mut err = 2 - 2 * r as i32;

        loop {
            self.line(xc - x, yc + y, xc + x, yc - y, color);
            self.line(xc - y, yc - x, xc + y, yc + x, color);
            self.line(xc + x, yc - y, xc - x, yc + y, color);
            self.line(xc + y, yc + x, xc - y, yc - x, color);

            let e = err;
            if e > x {
                x += 1;
                err += x * 2 + 1;
            }
            if e <= y {
                y += 1;
                err += y * 2 + 1;
            }
            if x >= 0 {
                break;
            }
        }
        Ok(())
    }

    /// Draws the triangle outline through the three vertices.
    pub fn draw_triangle(
        &mut self,
        x1: u8,
        y1: u8,
        x2: u8,
        y2: u8,
        x3: u8,
        y3: u8,
        color: Color,
    ) -> Result<(), Error<I2C::Error>> {
        self.ensure_init()?;
        let (x1, y1, x2, y2, x3, y3) =
            (x1 as i32, y1 as i32, x2 as i32, y2 as i32, x3 as i32, y3 as i32);
        self.line(x1, y1, x2, y2, color);
        self.line(x2, y2, x3, y3, color);
        self.line(x3, y3, x1, y1, color);
        Ok(())
    }

    /// Fills the triangle by walking the edge (x1, y1)-(x2, y2) with a DDA
    /// and connecting every interpolated edge point to the third vertex.
    pub fn draw_filled_triangle(
        &mut self,
        x1: u8,
        y1: u8,
        x2: u8,
        y2: u8,
        x3: u8,
        y3: u8,
        color: Color,
    ) -> Result<(), Error<I2C::Error>> {
        self.ensure_init()?;
        let (x1, y1, x2, y2, x3, y3) =
            (x1 as i32, y1 as i32, x2 as i32, y2 as i32, x3 as i32, y3 as i32);

        let deltax = (x2 - x1).abs();
        let deltay = (y2 - y1).abs();
        let mut x = x1;
        let mut y = y1;

        let (mut xinc1, mut xinc2) = if x2 >= x1 { (1, 1) } else { (-1, -1) };
        let (mut yinc1, mut yinc2) = if y2 >= y1 { (1, 1) } else { (-1, -1) };

        let (den, mut num, numadd, numpixels);
        if deltax >= deltay {
            xinc1 = 0;
            yinc2 = 0;
            den = deltax;
            num = deltax / 2;
            numadd = deltay;
            numpixels = deltax;
        } else {
            xinc2 = 0;
            yinc1 = 0;
            den = deltay;
            num = deltay / 2;
            numadd = deltax;
            numpixels = deltay;
        }

        for _ in 0..=numpixels {
            self.line(x, y, x3, y3, color);
            num += numadd;
            if num >= den {
                num -= den;
                x += xinc1;
                y += yinc1;
            }
            x += xinc2;
            y += yinc2;
        }
        Ok(())
    }

    /// Draws a 1-bit bitmap with top-left corner (x, y). Rows are byte
    /// aligned, MSB first; only set bits paint, so the background shows
    /// through cleared ones.
    pub fn draw_bitmap(
        &mut self,
        x: u8,
        y: u8,
        bitmap: &[u8],
        w: u8,
        h: u8,
        color: Color,
    ) -> Result<(), Error<I2C::Error>> {
        self.ensure_init()?;
        let stride = (w as usize + 7) >> 3;
        if bitmap.len() < stride * h as usize {
            return Err(Error::InvalidArgument);
        }

        for j in 0..h as usize {
            for i in 0..w as usize {
                if bitmap[j * stride + (i >> 3)] & (0x80 >> (i & 7)) != 0 {
                    self.plot(x as i32 + i as i32, y as i32 + j as i32, color);
                }
            }
        }
        Ok(())
    }

    /// Draws one glyph at the cursor and advances the cursor by the font
    /// width. Glyphs are opaque: background bits paint in the inverse
    /// color, overwriting whatever was in the cell.
    pub fn draw_char(
        &mut self,
        ch: char,
        font: &Font,
        color: Color,
    ) -> Result<(), Error<I2C::Error>> {
        self.ensure_init()?;
        for row in 0..font.height {
            let bits = font.glyph_row(ch, row).ok_or(Error::InvalidArgument)?;
            for col in 0..font.width {
                let pixel = if (bits << col) & 0x8000 != 0 {
                    color
                } else {
                    color.inverse()
                };
                self.plot(
                    self.cursor_x as i32 + col as i32,
                    self.cursor_y as i32 + row as i32,
                    pixel,
                );
            }
        }
        self.cursor_x = self.cursor_x.wrapping_add(font.width);
        Ok(())
    }

    /// Draws a string glyph by glyph, left to right from the cursor.
    pub fn draw_str(
        &mut self,
        text: &str,
        font: &Font,
        color: Color,
    ) -> Result<(), Error<I2C::Error>> {
        self.ensure_init()?;
        for ch in text.chars() {
            self.draw_char(ch, font, color)?;
        }
        Ok(())
    }

    /// Renders `num` in the given base (2 to 32), sign first for negative
    /// numbers. Digits above 9 use 'A' onward.
    pub fn draw_int(
        &mut self,
        num: i32,
        base: u8,
        font: &Font,
        color: Color,
    ) -> Result<(), Error<I2C::Error>> {
        self.ensure_init()?;
        if !(2..=32).contains(&base) {
            return Err(Error::InvalidArgument);
        }

        // Digits accumulate least-significant first, sign last; drawing
        // back to front restores reading order.
        let mut digits = [0u8; INT_BUF_LEN];
        let mut len = 0;
        let mut rest = num.unsigned_abs();
        if rest == 0 {
            digits[0] = b'0';
            len = 1;
        } else {
            while rest != 0 {
                let rem = (rest % base as u32) as u8;
                digits[len] = if rem > 9 { b'A' + rem - 10 } else { b'0' + rem };
                len += 1;
                rest /= base as u32;
            }
            if num < 0 {
                digits[len] = b'-';
                len += 1;
            }
        }

        for i in (0..len).rev() {
            self.draw_char(digits[i] as char, font, color)?;
        }
        Ok(())
    }
}

#[cfg(feature = "graphics")]
mod eg {
    use core::convert::Infallible;

    use embedded_graphics_core::draw_target::DrawTarget;
    use embedded_graphics_core::geometry::{OriginDimensions, Size};
    use embedded_graphics_core::pixelcolor::BinaryColor;
    use embedded_graphics_core::Pixel;
    use embedded_hal::i2c::I2c;

    use crate::display::Ssd1306;
    use crate::framebuffer::Color;
    use crate::{HEIGHT, WIDTH};

    impl<I2C> OriginDimensions for Ssd1306<I2C> {
        fn size(&self) -> Size {
            Size::new(WIDTH as u32, HEIGHT as u32)
        }
    }

    /// Pixels land in the local framebuffer only; flushing stays explicit
    /// via [`Ssd1306::update`].
    impl<I2C: I2c> DrawTarget for Ssd1306<I2C> {
        type Color = BinaryColor;
        type Error = Infallible;

        fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
        where
            I: IntoIterator<Item = Pixel<BinaryColor>>,
        {
            for Pixel(point, raw) in pixels {
                let color = if raw.is_on() {
                    Color::White
                } else {
                    Color::Black
                };
                self.plot(point.x, point.y, color);
            }
            Ok(())
        }
    }
}
