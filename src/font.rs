//! Font contract and built-in glyph tables.
//!
//! A glyph row is keyed by `(character - 0x20) * height + row` and read
//! MSB-first, leftmost column in the most significant bit. Fonts up to
//! 8 pixels wide store one byte per row, wider fonts one 16-bit word per
//! row; the tag on [`Glyphs`] picks the decoding so callers can supply
//! their own tables in either encoding.

/// Per-row glyph bit source, tagged by storage width.
pub enum Glyphs {
    /// One byte per row, fonts up to 8 pixels wide.
    Narrow(&'static [u8]),
    /// One 16-bit word per row, fonts up to 16 pixels wide.
    Wide(&'static [u16]),
}

/// A fixed-cell bitmap font covering printable ASCII from 0x20 up.
pub struct Font {
    /// Cell width in pixels; the cursor advances by this after each glyph.
    pub width: u8,
    /// Cell height in pixels.
    pub height: u8,
    /// Row bit source.
    pub glyphs: Glyphs,
}

impl Font {
    /// One glyph row normalized to 16 bits with the leftmost column at the
    /// most significant bit, or `None` for characters outside the table.
    pub fn glyph_row(&self, ch: char, row: u8) -> Option<u16> {
        let index = (ch as usize).checked_sub(0x20)? * self.height as usize + row as usize;
        match self.glyphs {
            Glyphs::Narrow(map) => map.get(index).map(|&bits| (bits as u16) << 8),
            Glyphs::Wide(map) => map.get(index).copied(),
        }
    }
}

/// 7x10 font, one byte per glyph row.
pub static FONT_7X10: Font = Font {
    width: 7,
    height: 10,
    glyphs: Glyphs::Narrow(&FONT_7X10_DATA),
};

/// 11x18 font, one 16-bit word per glyph row.
pub static FONT_11X18: Font = Font {
    width: 11,
    height: 18,
    glyphs: Glyphs::Wide(&FONT_11X18_DATA),
};

#[rustfmt::skip]
static FONT_7X10_DATA: [u8; 960] = [
    // ' ' (0x20)
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // '!' (0x21)
    0x00, 0x10, 0x10, 0x10, 0x10, 0x10, 0x00, 0x10, 0x00, 0x00,
    // '"' (0x22)
    0x00, 0x28, 0x28, 0x28, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // '#' (0x23)
    0x00, 0x28, 0x28, 0x7C, 0x28, 0x7C, 0x28, 0x28, 0x00, 0x00,
    // '$' (0x24)
    0x00, 0x10, 0x3C, 0x50, 0x38, 0x14, 0x78, 0x10, 0x00, 0x00,
    // '%' (0x25)
    0x00, 0x60, 0x64, 0x08, 0x10, 0x20, 0x4C, 0x0C, 0x00, 0x00,
    // '&' (0x26)
    0x00, 0x30, 0x48, 0x50, 0x20, 0x54, 0x48, 0x34, 0x00, 0x00,
    // ''' (0x27)
    0x00, 0x10, 0x10, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // '(' (0x28)
    0x00, 0x08, 0x10, 0x20, 0x20, 0x20, 0x10, 0x08, 0x00, 0x00,
    // ')' (0x29)
    0x00, 0x20, 0x10, 0x08, 0x08, 0x08, 0x10, 0x20, 0x00, 0x00,
    // '*' (0x2A)
    0x00, 0x00, 0x10, 0x54, 0x38, 0x54, 0x10, 0x00, 0x00, 0x00,
    // '+' (0x2B)
    0x00, 0x00, 0x10, 0x10, 0x7C, 0x10, 0x10, 0x00, 0x00, 0x00,
    // ',' (0x2C)
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x18, 0x10, 0x20, 0x00,
    // '-' (0x2D)
    0x00, 0x00, 0x00, 0x00, 0x7C, 0x00, 0x00, 0x00, 0x00, 0x00,
    // '.' (0x2E)
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x18, 0x18, 0x00, 0x00,
    // '/' (0x2F)
    0x00, 0x04, 0x08, 0x08, 0x10, 0x20, 0x20, 0x40, 0x00, 0x00,
    // '0' (0x30)
    0x00, 0x38, 0x44, 0x4C, 0x54, 0x64, 0x44, 0x38, 0x00, 0x00,
    // '1' (0x31)
    0x00, 0x10, 0x30, 0x10, 0x10, 0x10, 0x10, 0x38, 0x00, 0x00,
    // '2' (0x32)
    0x00, 0x38, 0x44, 0x04, 0x08, 0x10, 0x20, 0x7C, 0x00, 0x00,
    // '3' (0x33)
    0x00, 0x7C, 0x08, 0x10, 0x08, 0x04, 0x44, 0x38, 0x00, 0x00,
    // '4' (0x34)
    0x00, 0x08, 0x18, 0x28, 0x48, 0x7C, 0x08, 0x08, 0x00, 0x00,
    // '5' (0x35)
    0x00, 0x7C, 0x40, 0x78, 0x04, 0x04, 0x44, 0x38, 0x00, 0x00,
    // '6' (0x36)
    0x00, 0x18, 0x20, 0x40, 0x78, 0x44, 0x44, 0x38, 0x00, 0x00,
    // '7' (0x37)
    0x00, 0x7C, 0x04, 0x08, 0x10, 0x20, 0x20, 0x20, 0x00, 0x00,
    // '8' (0x38)
    0x00, 0x38, 0x44, 0x44, 0x38, 0x44, 0x44, 0x38, 0x00, 0x00,
    // '9' (0x39)
    0x00, 0x38, 0x44, 0x44, 0x3C, 0x04, 0x08, 0x30, 0x00, 0x00,
    // ':' (0x3A)
    0x00, 0x00, 0x18, 0x18, 0x00, 0x18, 0x18, 0x00, 0x00, 0x00,
    // ';' (0x3B)
    0x00, 0x00, 0x18, 0x18, 0x00, 0x18, 0x10, 0x20, 0x00, 0x00,
    // '<' (0x3C)
    0x00, 0x08, 0x10, 0x20, 0x40, 0x20, 0x10, 0x08, 0x00, 0x00,
    // '=' (0x3D)
    0x00, 0x00, 0x00, 0x7C, 0x00, 0x7C, 0x00, 0x00, 0x00, 0x00,
    // '>' (0x3E)
    0x00, 0x20, 0x10, 0x08, 0x04, 0x08, 0x10, 0x20, 0x00, 0x00,
    // '?' (0x3F)
    0x00, 0x38, 0x44, 0x04, 0x08, 0x10, 0x00, 0x10, 0x00, 0x00,
    // '@' (0x40)
    0x00, 0x38, 0x44, 0x5C, 0x54, 0x5C, 0x40, 0x38, 0x00, 0x00,
    // 'A' (0x41)
    0x00, 0x38, 0x44, 0x44, 0x7C, 0x44, 0x44, 0x44, 0x00, 0x00,
    // 'B' (0x42)
    0x00, 0x78, 0x44, 0x44, 0x78, 0x44, 0x44, 0x78, 0x00, 0x00,
    // 'C' (0x43)
    0x00, 0x38, 0x44, 0x40, 0x40, 0x40, 0x44, 0x38, 0x00, 0x00,
    // 'D' (0x44)
    0x00, 0x78, 0x44, 0x44, 0x44, 0x44, 0x44, 0x78, 0x00, 0x00,
    // 'E' (0x45)
    0x00, 0x7C, 0x40, 0x40, 0x78, 0x40, 0x40, 0x7C, 0x00, 0x00,
    // 'F' (0x46)
    0x00, 0x7C, 0x40, 0x40, 0x78, 0x40, 0x40, 0x40, 0x00, 0x00,
    // 'G' (0x47)
    0x00, 0x38, 0x44, 0x40, 0x5C, 0x44, 0x44, 0x3C, 0x00, 0x00,
    // 'H' (0x48)
    0x00, 0x44, 0x44, 0x44, 0x7C, 0x44, 0x44, 0x44, 0x00, 0x00,
    // 'I' (0x49)
    0x00, 0x38, 0x10, 0x10, 0x10, 0x10, 0x10, 0x38, 0x00, 0x00,
    // 'J' (0x4A)
    0x00, 0x1C, 0x08, 0x08, 0x08, 0x08, 0x48, 0x30, 0x00, 0x00,
    // 'K' (0x4B)
    0x00, 0x44, 0x48, 0x50, 0x60, 0x50, 0x48, 0x44, 0x00, 0x00,
    // 'L' (0x4C)
    0x00, 0x40, 0x40, 0x40, 0x40, 0x40, 0x40, 0x7C, 0x00, 0x00,
    // 'M' (0x4D)
    0x00, 0x44, 0x6C, 0x54, 0x54, 0x44, 0x44, 0x44, 0x00, 0x00,
    // 'N' (0x4E)
    0x00, 0x44, 0x64, 0x54, 0x4C, 0x44, 0x44, 0x44, 0x00, 0x00,
    // 'O' (0x4F)
    0x00, 0x38, 0x44, 0x44, 0x44, 0x44, 0x44, 0x38, 0x00, 0x00,
    // 'P' (0x50)
    0x00, 0x78, 0x44, 0x44, 0x78, 0x40, 0x40, 0x40, 0x00, 0x00,
    // 'Q' (0x51)
    0x00, 0x38, 0x44, 0x44, 0x44, 0x54, 0x48, 0x34, 0x00, 0x00,
    // 'R' (0x52)
    0x00, 0x78, 0x44, 0x44, 0x78, 0x50, 0x48, 0x44, 0x00, 0x00,
    // 'S' (0x53)
    0x00, 0x3C, 0x40, 0x40, 0x38, 0x04, 0x04, 0x78, 0x00, 0x00,
    // 'T' (0x54)
    0x00, 0x7C, 0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x00, 0x00,
    // 'U' (0x55)
    0x00, 0x44, 0x44, 0x44, 0x44, 0x44, 0x44, 0x38, 0x00, 0x00,
    // 'V' (0x56)
    0x00, 0x44, 0x44, 0x44, 0x44, 0x28, 0x28, 0x10, 0x00, 0x00,
    // 'W' (0x57)
    0x00, 0x44, 0x44, 0x44, 0x54, 0x54, 0x6C, 0x44, 0x00, 0x00,
    // 'X' (0x58)
    0x00, 0x44, 0x44, 0x28, 0x10, 0x28, 0x44, 0x44, 0x00, 0x00,
    // 'Y' (0x59)
    0x00, 0x44, 0x44, 0x28, 0x10, 0x10, 0x10, 0x10, 0x00, 0x00,
    // 'Z' (0x5A)
    0x00, 0x7C, 0x04, 0x08, 0x10, 0x20, 0x40, 0x7C, 0x00, 0x00,
    // '[' (0x5B)
    0x00, 0x38, 0x20, 0x20, 0x20, 0x20, 0x20, 0x38, 0x00, 0x00,
    // '\' (0x5C)
    0x00, 0x40, 0x20, 0x20, 0x10, 0x08, 0x08, 0x04, 0x00, 0x00,
    // ']' (0x5D)
    0x00, 0x38, 0x08, 0x08, 0x08, 0x08, 0x08, 0x38, 0x00, 0x00,
    // '^' (0x5E)
    0x00, 0x10, 0x28, 0x44, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // '_' (0x5F)
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x7C, 0x00, 0x00,
    // '`' (0x60)
    0x00, 0x20, 0x10, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // 'a' (0x61)
    0x00, 0x00, 0x00, 0x38, 0x04, 0x3C, 0x44, 0x3C, 0x00, 0x00,
    // 'b' (0x62)
    0x00, 0x40, 0x40, 0x78, 0x44, 0x44, 0x44, 0x78, 0x00, 0x00,
    // 'c' (0x63)
    0x00, 0x00, 0x00, 0x38, 0x40, 0x40, 0x44, 0x38, 0x00, 0x00,
    // 'd' (0x64)
    0x00, 0x04, 0x04, 0x3C, 0x44, 0x44, 0x44, 0x3C, 0x00, 0x00,
    // 'e' (0x65)
    0x00, 0x00, 0x00, 0x38, 0x44, 0x7C, 0x40, 0x38, 0x00, 0x00,
    // 'f' (0x66)
    0x00, 0x18, 0x24, 0x20, 0x70, 0x20, 0x20, 0x20, 0x00, 0x00,
    // 'g' (0x67)
    0x00, 0x00, 0x00, 0x3C, 0x44, 0x44, 0x3C, 0x04, 0x44, 0x38,
    // 'h' (0x68)
    0x00, 0x40, 0x40, 0x78, 0x44, 0x44, 0x44, 0x44, 0x00, 0x00,
    // 'i' (0x69)
    0x00, 0x10, 0x00, 0x30, 0x10, 0x10, 0x10, 0x38, 0x00, 0x00,
    // 'j' (0x6A)
    0x00, 0x08, 0x00, 0x18, 0x08, 0x08, 0x08, 0x08, 0x48, 0x30,
    // 'k' (0x6B)
    0x00, 0x40, 0x40, 0x48, 0x50, 0x60, 0x50, 0x48, 0x00, 0x00,
    // 'l' (0x6C)
    0x00, 0x30, 0x10, 0x10, 0x10, 0x10, 0x10, 0x38, 0x00, 0x00,
    // 'm' (0x6D)
    0x00, 0x00, 0x00, 0x68, 0x54, 0x54, 0x54, 0x54, 0x00, 0x00,
    // 'n' (0x6E)
    0x00, 0x00, 0x00, 0x78, 0x44, 0x44, 0x44, 0x44, 0x00, 0x00,
    // 'o' (0x6F)
    0x00, 0x00, 0x00, 0x38, 0x44, 0x44, 0x44, 0x38, 0x00, 0x00,
    // 'p' (0x70)
    0x00, 0x00, 0x00, 0x78, 0x44, 0x44, 0x78, 0x40, 0x40, 0x40,
    // 'q' (0x71)
    0x00, 0x00, 0x00, 0x3C, 0x44, 0x44, 0x3C, 0x04, 0x04, 0x04,
    // 'r' (0x72)
    0x00, 0x00, 0x00, 0x58, 0x64, 0x40, 0x40, 0x40, 0x00, 0x00,
    // 's' (0x73)
    0x00, 0x00, 0x00, 0x3C, 0x40, 0x38, 0x04, 0x78, 0x00, 0x00,
    // 't' (0x74)
    0x00, 0x20, 0x20, 0x70, 0x20, 0x20, 0x24, 0x18, 0x00, 0x00,
    // 'u' (0x75)
    0x00, 0x00, 0x00, 0x44, 0x44, 0x44, 0x4C, 0x34, 0x00, 0x00,
    // 'v' (0x76)
    0x00, 0x00, 0x00, 0x44, 0x44, 0x44, 0x28, 0x10, 0x00, 0x00,
    // 'w' (0x77)
    0x00, 0x00, 0x00, 0x44, 0x54, 0x54, 0x54, 0x28, 0x00, 0x00,
    // 'x' (0x78)
    0x00, 0x00, 0x00, 0x44, 0x28, 0x10, 0x28, 0x44, 0x00, 0x00,
    // 'y' (0x79)
    0x00, 0x00, 0x00, 0x44, 0x44, 0x44, 0x3C, 0x04, 0x44, 0x38,
    // 'z' (0x7A)
    0x00, 0x00, 0x00, 0x7C, 0x08, 0x10, 0x20, 0x7C, 0x00, 0x00,
    // '{' (0x7B)
    0x00, 0x0C, 0x10, 0x10, 0x20, 0x10, 0x10, 0x0C, 0x00, 0x00,
    // '|' (0x7C)
    0x00, 0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x00, 0x00,
    // '}' (0x7D)
    0x00, 0x60, 0x10, 0x10, 0x08, 0x10, 0x10, 0x60, 0x00, 0x00,
    // '~' (0x7E)
    0x00, 0x00, 0x00, 0x34, 0x58, 0x00, 0x00, 0x00, 0x00, 0x00,
    // DEL (0x7F)
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

#[rustfmt::skip]
static FONT_11X18_DATA: [u16; 1728] = [
    // ' ' (0x20)
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    // '!' (0x21)
    0x0000, 0x0000, 0x0600, 0x0600, 0x0600, 0x0600, 0x0600, 0x0600, 0x0600,
    0x0600, 0x0600, 0x0600, 0x0000, 0x0000, 0x0600, 0x0600, 0x0000, 0x0000,
    // '"' (0x22)
    0x0000, 0x0000, 0x1980, 0x1980, 0x1980, 0x1980, 0x1980, 0x1980, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    // '#' (0x23)
    0x0000, 0x0000, 0x1980, 0x1980, 0x1980, 0x1980, 0x7FE0, 0x7FE0, 0x1980,
    0x1980, 0x7FE0, 0x7FE0, 0x1980, 0x1980, 0x1980, 0x1980, 0x0000, 0x0000,
    // '$' (0x24)
    0x0000, 0x0000, 0x0600, 0x0600, 0x1FE0, 0x1FE0, 0x6600, 0x6600, 0x1F80,
    0x1F80, 0x0660, 0x0660, 0x7F80, 0x7F80, 0x0600, 0x0600, 0x0000, 0x0000,
    // '%' (0x25)
    0x0000, 0x0000, 0x7800, 0x7800, 0x7860, 0x7860, 0x0180, 0x0180, 0x0600,
    0x0600, 0x1800, 0x1800, 0x61E0, 0x61E0, 0x01E0, 0x01E0, 0x0000, 0x0000,
    // '&' (0x26)
    0x0000, 0x0000, 0x1E00, 0x1E00, 0x6180, 0x6180, 0x6600, 0x6600, 0x1800,
    0x1800, 0x6660, 0x6660, 0x6180, 0x6180, 0x1E60, 0x1E60, 0x0000, 0x0000,
    // ''' (0x27)
    0x0000, 0x0000, 0x0600, 0x0600, 0x0600, 0x0600, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    // '(' (0x28)
    0x0000, 0x0000, 0x0180, 0x0180, 0x0600, 0x0600, 0x1800, 0x1800, 0x1800,
    0x1800, 0x1800, 0x1800, 0x0600, 0x0600, 0x0180, 0x0180, 0x0000, 0x0000,
    // ')' (0x29)
    0x0000, 0x0000, 0x1800, 0x1800, 0x0600, 0x0600, 0x0180, 0x0180, 0x0180,
    0x0180, 0x0180, 0x0180, 0x0600, 0x0600, 0x1800, 0x1800, 0x0000, 0x0000,
    // '*' (0x2A)
    0x0000, 0x0000, 0x0000, 0x0000, 0x0600, 0x0600, 0x6660, 0x6660, 0x1F80,
    0x1F80, 0x6660, 0x6660, 0x0600, 0x0600, 0x0000, 0x0000, 0x0000, 0x0000,
    // '+' (0x2B)
    0x0000, 0x0000, 0x0000, 0x0000, 0x0600, 0x0600, 0x0600, 0x0600, 0x7FE0,
    0x7FE0, 0x0600, 0x0600, 0x0600, 0x0600, 0x0000, 0x0000, 0x0000, 0x0000,
    // ',' (0x2C)
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0780, 0x0780, 0x0600, 0x0600, 0x1800, 0x1800, 0x0000, 0x0000,
    // '-' (0x2D)
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x7FE0,
    0x7FE0, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    // '.' (0x2E)
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0780, 0x0780, 0x0780, 0x0780, 0x0000, 0x0000,
    // '/' (0x2F)
    0x0000, 0x0000, 0x0060, 0x0060, 0x0180, 0x0180, 0x0180, 0x0180, 0x0600,
    0x0600, 0x1800, 0x1800, 0x1800, 0x1800, 0x6000, 0x6000, 0x0000, 0x0000,
    // '0' (0x30)
    0x0000, 0x0000, 0x1F80, 0x1F80, 0x6060, 0x6060, 0x61E0, 0x61E0, 0x6660,
    0x6660, 0x7860, 0x7860, 0x6060, 0x6060, 0x1F80, 0x1F80, 0x0000, 0x0000,
    // '1' (0x31)
    0x0000, 0x0000, 0x0600, 0x0600, 0x1E00, 0x1E00, 0x0600, 0x0600, 0x0600,
    0x0600, 0x0600, 0x0600, 0x0600, 0x0600, 0x1F80, 0x1F80, 0x0000, 0x0000,
    // '2' (0x32)
    0x0000, 0x0000, 0x1F80, 0x1F80, 0x6060, 0x6060, 0x0060, 0x0060, 0x0180,
    0x0180, 0x0600, 0x0600, 0x1800, 0x1800, 0x7FE0, 0x7FE0, 0x0000, 0x0000,
    // '3' (0x33)
    0x0000, 0x0000, 0x7FE0, 0x7FE0, 0x0180, 0x0180, 0x0600, 0x0600, 0x0180,
    0x0180, 0x0060, 0x0060, 0x6060, 0x6060, 0x1F80, 0x1F80, 0x0000, 0x0000,
    // '4' (0x34)
    0x0000, 0x0000, 0x0180, 0x0180, 0x0780, 0x0780, 0x1980, 0x1980, 0x6180,
    0x6180, 0x7FE0, 0x7FE0, 0x0180, 0x0180, 0x0180, 0x0180, 0x0000, 0x0000,
    // '5' (0x35)
    0x0000, 0x0000, 0x7FE0, 0x7FE0, 0x6000, 0x6000, 0x7F80, 0x7F80, 0x0060,
    0x0060, 0x0060, 0x0060, 0x6060, 0x6060, 0x1F80, 0x1F80, 0x0000, 0x0000,
    // '6' (0x36)
    0x0000, 0x0000, 0x0780, 0x0780, 0x1800, 0x1800, 0x6000, 0x6000, 0x7F80,
    0x7F80, 0x6060, 0x6060, 0x6060, 0x6060, 0x1F80, 0x1F80, 0x0000, 0x0000,
    // '7' (0x37)
    0x0000, 0x0000, 0x7FE0, 0x7FE0, 0x0060, 0x0060, 0x0180, 0x0180, 0x0600,
    0x0600, 0x1800, 0x1800, 0x1800, 0x1800, 0x1800, 0x1800, 0x0000, 0x0000,
    // '8' (0x38)
    0x0000, 0x0000, 0x1F80, 0x1F80, 0x6060, 0x6060, 0x6060, 0x6060, 0x1F80,
    0x1F80, 0x6060, 0x6060, 0x6060, 0x6060, 0x1F80, 0x1F80, 0x0000, 0x0000,
    // '9' (0x39)
    0x0000, 0x0000, 0x1F80, 0x1F80, 0x6060, 0x6060, 0x6060, 0x6060, 0x1FE0,
    0x1FE0, 0x0060, 0x0060, 0x0180, 0x0180, 0x1E00, 0x1E00, 0x0000, 0x0000,
    // ':' (0x3A)
    0x0000, 0x0000, 0x0000, 0x0000, 0x0780, 0x0780, 0x0780, 0x0780, 0x0000,
    0x0000, 0x0780, 0x0780, 0x0780, 0x0780, 0x0000, 0x0000, 0x0000, 0x0000,
    // ';' (0x3B)
    0x0000, 0x0000, 0x0000, 0x0000, 0x0780, 0x0780, 0x0780, 0x0780, 0x0000,
    0x0000, 0x0780, 0x0780, 0x0600, 0x0600, 0x1800, 0x1800, 0x0000, 0x0000,
    // '<' (0x3C)
    0x0000, 0x0000, 0x0180, 0x0180, 0x0600, 0x0600, 0x1800, 0x1800, 0x6000,
    0x6000, 0x1800, 0x1800, 0x0600, 0x0600, 0x0180, 0x0180, 0x0000, 0x0000,
    // '=' (0x3D)
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x7FE0, 0x7FE0, 0x0000,
    0x0000, 0x7FE0, 0x7FE0, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    // '>' (0x3E)
    0x0000, 0x0000, 0x1800, 0x1800, 0x0600, 0x0600, 0x0180, 0x0180, 0x0060,
    0x0060, 0x0180, 0x0180, 0x0600, 0x0600, 0x1800, 0x1800, 0x0000, 0x0000,
    // '?' (0x3F)
    0x0000, 0x0000, 0x1F80, 0x1F80, 0x6060, 0x6060, 0x0060, 0x0060, 0x0180,
    0x0180, 0x0600, 0x0600, 0x0000, 0x0000, 0x0600, 0x0600, 0x0000, 0x0000,
    // '@' (0x40)
    0x0000, 0x0000, 0x1F80, 0x1F80, 0x6060, 0x6060, 0x67E0, 0x67E0, 0x6660,
    0x6660, 0x67E0, 0x67E0, 0x6000, 0x6000, 0x1F80, 0x1F80, 0x0000, 0x0000,
    // 'A' (0x41)
    0x0000, 0x0000, 0x1F80, 0x1F80, 0x6060, 0x6060, 0x6060, 0x6060, 0x7FE0,
    0x7FE0, 0x6060, 0x6060, 0x6060, 0x6060, 0x6060, 0x6060, 0x0000, 0x0000,
    // 'B' (0x42)
    0x0000, 0x0000, 0x7F80, 0x7F80, 0x6060, 0x6060, 0x6060, 0x6060, 0x7F80,
    0x7F80, 0x6060, 0x6060, 0x6060, 0x6060, 0x7F80, 0x7F80, 0x0000, 0x0000,
    // 'C' (0x43)
    0x0000, 0x0000, 0x1F80, 0x1F80, 0x6060, 0x6060, 0x6000, 0x6000, 0x6000,
    0x6000, 0x6000, 0x6000, 0x6060, 0x6060, 0x1F80, 0x1F80, 0x0000, 0x0000,
    // 'D' (0x44)
    0x0000, 0x0000, 0x7F80, 0x7F80, 0x6060, 0x6060, 0x6060, 0x6060, 0x6060,
    0x6060, 0x6060, 0x6060, 0x6060, 0x6060, 0x7F80, 0x7F80, 0x0000, 0x0000,
    // 'E' (0x45)
    0x0000, 0x0000, 0x7FE0, 0x7FE0, 0x6000, 0x6000, 0x6000, 0x6000, 0x7F80,
    0x7F80, 0x6000, 0x6000, 0x6000, 0x6000, 0x7FE0, 0x7FE0, 0x0000, 0x0000,
    // 'F' (0x46)
    0x0000, 0x0000, 0x7FE0, 0x7FE0, 0x6000, 0x6000, 0x6000, 0x6000, 0x7F80,
    0x7F80, 0x6000, 0x6000, 0x6000, 0x6000, 0x6000, 0x6000, 0x0000, 0x0000,
    // 'G' (0x47)
    0x0000, 0x0000, 0x1F80, 0x1F80, 0x6060, 0x6060, 0x6000, 0x6000, 0x67E0,
    0x67E0, 0x6060, 0x6060, 0x6060, 0x6060, 0x1FE0, 0x1FE0, 0x0000, 0x0000,
    // 'H' (0x48)
    0x0000, 0x0000, 0x6060, 0x6060, 0x6060, 0x6060, 0x6060, 0x6060, 0x7FE0,
    0x7FE0, 0x6060, 0x6060, 0x6060, 0x6060, 0x6060, 0x6060, 0x0000, 0x0000,
    // 'I' (0x49)
    0x0000, 0x0000, 0x1F80, 0x1F80, 0x0600, 0x0600, 0x0600, 0x0600, 0x0600,
    0x0600, 0x0600, 0x0600, 0x0600, 0x0600, 0x1F80, 0x1F80, 0x0000, 0x0000,
    // 'J' (0x4A)
    0x0000, 0x0000, 0x07E0, 0x07E0, 0x0180, 0x0180, 0x0180, 0x0180, 0x0180,
    0x0180, 0x0180, 0x0180, 0x6180, 0x6180, 0x1E00, 0x1E00, 0x0000, 0x0000,
    // 'K' (0x4B)
    0x0000, 0x0000, 0x6060, 0x6060, 0x6180, 0x6180, 0x6600, 0x6600, 0x7800,
    0x7800, 0x6600, 0x6600, 0x6180, 0x6180, 0x6060, 0x6060, 0x0000, 0x0000,
    // 'L' (0x4C)
    0x0000, 0x0000, 0x6000, 0x6000, 0x6000, 0x6000, 0x6000, 0x6000, 0x6000,
    0x6000, 0x6000, 0x6000, 0x6000, 0x6000, 0x7FE0, 0x7FE0, 0x0000, 0x0000,
    // 'M' (0x4D)
    0x0000, 0x0000, 0x6060, 0x6060, 0x79E0, 0x79E0, 0x6660, 0x6660, 0x6660,
    0x6660, 0x6060, 0x6060, 0x6060, 0x6060, 0x6060, 0x6060, 0x0000, 0x0000,
    // 'N' (0x4E)
    0x0000, 0x0000, 0x6060, 0x6060, 0x7860, 0x7860, 0x6660, 0x6660, 0x61E0,
    0x61E0, 0x6060, 0x6060, 0x6060, 0x6060, 0x6060, 0x6060, 0x0000, 0x0000,
    // 'O' (0x4F)
    0x0000, 0x0000, 0x1F80, 0x1F80, 0x6060, 0x6060, 0x6060, 0x6060, 0x6060,
    0x6060, 0x6060, 0x6060, 0x6060, 0x6060, 0x1F80, 0x1F80, 0x0000, 0x0000,
    // 'P' (0x50)
    0x0000, 0x0000, 0x7F80, 0x7F80, 0x6060, 0x6060, 0x6060, 0x6060, 0x7F80,
    0x7F80, 0x6000, 0x6000, 0x6000, 0x6000, 0x6000, 0x6000, 0x0000, 0x0000,
    // 'Q' (0x51)
    0x0000, 0x0000, 0x1F80, 0x1F80, 0x6060, 0x6060, 0x6060, 0x6060, 0x6060,
    0x6060, 0x6660, 0x6660, 0x6180, 0x6180, 0x1E60, 0x1E60, 0x0000, 0x0000,
    // 'R' (0x52)
    0x0000, 0x0000, 0x7F80, 0x7F80, 0x6060, 0x6060, 0x6060, 0x6060, 0x7F80,
    0x7F80, 0x6600, 0x6600, 0x6180, 0x6180, 0x6060, 0x6060, 0x0000, 0x0000,
    // 'S' (0x53)
    0x0000, 0x0000, 0x1FE0, 0x1FE0, 0x6000, 0x6000, 0x6000, 0x6000, 0x1F80,
    0x1F80, 0x0060, 0x0060, 0x0060, 0x0060, 0x7F80, 0x7F80, 0x0000, 0x0000,
    // 'T' (0x54)
    0x0000, 0x0000, 0x7FE0, 0x7FE0, 0x0600, 0x0600, 0x0600, 0x0600, 0x0600,
    0x0600, 0x0600, 0x0600, 0x0600, 0x0600, 0x0600, 0x0600, 0x0000, 0x0000,
    // 'U' (0x55)
    0x0000, 0x0000, 0x6060, 0x6060, 0x6060, 0x6060, 0x6060, 0x6060, 0x6060,
    0x6060, 0x6060, 0x6060, 0x6060, 0x6060, 0x1F80, 0x1F80, 0x0000, 0x0000,
    // 'V' (0x56)
    0x0000, 0x0000, 0x6060, 0x6060, 0x6060, 0x6060, 0x6060, 0x6060, 0x6060,
    0x6060, 0x1980, 0x1980, 0x1980, 0x1980, 0x0600, 0x0600, 0x0000, 0x0000,
    // 'W' (0x57)
    0x0000, 0x0000, 0x6060, 0x6060, 0x6060, 0x6060, 0x6060, 0x6060, 0x6660,
    0x6660, 0x6660, 0x6660, 0x79E0, 0x79E0, 0x6060, 0x6060, 0x0000, 0x0000,
    // 'X' (0x58)
    0x0000, 0x0000, 0x6060, 0x6060, 0x6060, 0x6060, 0x1980, 0x1980, 0x0600,
    0x0600, 0x1980, 0x1980, 0x6060, 0x6060, 0x6060, 0x6060, 0x0000, 0x0000,
    // 'Y' (0x59)
    0x0000, 0x0000, 0x6060, 0x6060, 0x6060, 0x6060, 0x1980, 0x1980, 0x0600,
    0x0600, 0x0600, 0x0600, 0x0600, 0x0600, 0x0600, 0x0600, 0x0000, 0x0000,
    // 'Z' (0x5A)
    0x0000, 0x0000, 0x7FE0, 0x7FE0, 0x0060, 0x0060, 0x0180, 0x0180, 0x0600,
    0x0600, 0x1800, 0x1800, 0x6000, 0x6000, 0x7FE0, 0x7FE0, 0x0000, 0x0000,
    // '[' (0x5B)
    0x0000, 0x0000, 0x1F80, 0x1F80, 0x1800, 0x1800, 0x1800, 0x1800, 0x1800,
    0x1800, 0x1800, 0x1800, 0x1800, 0x1800, 0x1F80, 0x1F80, 0x0000, 0x0000,
    // '\' (0x5C)
    0x0000, 0x0000, 0x6000, 0x6000, 0x1800, 0x1800, 0x1800, 0x1800, 0x0600,
    0x0600, 0x0180, 0x0180, 0x0180, 0x0180, 0x0060, 0x0060, 0x0000, 0x0000,
    // ']' (0x5D)
    0x0000, 0x0000, 0x1F80, 0x1F80, 0x0180, 0x0180, 0x0180, 0x0180, 0x0180,
    0x0180, 0x0180, 0x0180, 0x0180, 0x0180, 0x1F80, 0x1F80, 0x0000, 0x0000,
    // '^' (0x5E)
    0x0000, 0x0000, 0x0600, 0x0600, 0x1980, 0x1980, 0x6060, 0x6060, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    // '_' (0x5F)
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x7FE0, 0x7FE0, 0x0000, 0x0000,
    // '`' (0x60)
    0x0000, 0x0000, 0x1800, 0x1800, 0x0600, 0x0600, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    // 'a' (0x61)
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x1F80, 0x1F80, 0x0060,
    0x0060, 0x1FE0, 0x1FE0, 0x6060, 0x6060, 0x1FE0, 0x1FE0, 0x0000, 0x0000,
    // 'b' (0x62)
    0x0000, 0x0000, 0x6000, 0x6000, 0x6000, 0x6000, 0x7F80, 0x7F80, 0x6060,
    0x6060, 0x6060, 0x6060, 0x6060, 0x6060, 0x7F80, 0x7F80, 0x0000, 0x0000,
    // 'c' (0x63)
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x1F80, 0x1F80, 0x6000,
    0x6000, 0x6000, 0x6000, 0x6060, 0x6060, 0x1F80, 0x1F80, 0x0000, 0x0000,
    // 'd' (0x64)
    0x0000, 0x0000, 0x0060, 0x0060, 0x0060, 0x0060, 0x1FE0, 0x1FE0, 0x6060,
    0x6060, 0x6060, 0x6060, 0x6060, 0x6060, 0x1FE0, 0x1FE0, 0x0000, 0x0000,
    // 'e' (0x65)
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x1F80, 0x1F80, 0x6060,
    0x6060, 0x7FE0, 0x7FE0, 0x6000, 0x6000, 0x1F80, 0x1F80, 0x0000, 0x0000,
    // 'f' (0x66)
    0x0000, 0x0000, 0x0780, 0x0780, 0x1860, 0x1860, 0x1800, 0x1800, 0x7E00,
    0x7E00, 0x1800, 0x1800, 0x1800, 0x1800, 0x1800, 0x1800, 0x0000, 0x0000,
    // 'g' (0x67)
    0x0000, 0x0000, 0x0000, 0x0000, 0x1FE0, 0x1FE0, 0x6060, 0x6060, 0x6060,
    0x6060, 0x1FE0, 0x1FE0, 0x0060, 0x0060, 0x6060, 0x6060, 0x1F80, 0x1F80,
    // 'h' (0x68)
    0x0000, 0x0000, 0x6000, 0x6000, 0x6000, 0x6000, 0x7F80, 0x7F80, 0x6060,
    0x6060, 0x6060, 0x6060, 0x6060, 0x6060, 0x6060, 0x6060, 0x0000, 0x0000,
    // 'i' (0x69)
    0x0000, 0x0000, 0x0600, 0x0600, 0x0000, 0x0000, 0x1E00, 0x1E00, 0x0600,
    0x0600, 0x0600, 0x0600, 0x0600, 0x0600, 0x1F80, 0x1F80, 0x0000, 0x0000,
    // 'j' (0x6A)
    0x0180, 0x0180, 0x0000, 0x0000, 0x0780, 0x0780, 0x0180, 0x0180, 0x0180,
    0x0180, 0x0180, 0x0180, 0x0180, 0x0180, 0x6180, 0x6180, 0x1E00, 0x1E00,
    // 'k' (0x6B)
    0x0000, 0x0000, 0x6000, 0x6000, 0x6000, 0x6000, 0x6180, 0x6180, 0x6600,
    0x6600, 0x7800, 0x7800, 0x6600, 0x6600, 0x6180, 0x6180, 0x0000, 0x0000,
    // 'l' (0x6C)
    0x0000, 0x0000, 0x1E00, 0x1E00, 0x0600, 0x0600, 0x0600, 0x0600, 0x0600,
    0x0600, 0x0600, 0x0600, 0x0600, 0x0600, 0x1F80, 0x1F80, 0x0000, 0x0000,
    // 'm' (0x6D)
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x7980, 0x7980, 0x6660,
    0x6660, 0x6660, 0x6660, 0x6660, 0x6660, 0x6660, 0x6660, 0x0000, 0x0000,
    // 'n' (0x6E)
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x7F80, 0x7F80, 0x6060,
    0x6060, 0x6060, 0x6060, 0x6060, 0x6060, 0x6060, 0x6060, 0x0000, 0x0000,
    // 'o' (0x6F)
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x1F80, 0x1F80, 0x6060,
    0x6060, 0x6060, 0x6060, 0x6060, 0x6060, 0x1F80, 0x1F80, 0x0000, 0x0000,
    // 'p' (0x70)
    0x0000, 0x0000, 0x0000, 0x0000, 0x7F80, 0x7F80, 0x6060, 0x6060, 0x6060,
    0x6060, 0x7F80, 0x7F80, 0x6000, 0x6000, 0x6000, 0x6000, 0x6000, 0x6000,
    // 'q' (0x71)
    0x0000, 0x0000, 0x0000, 0x0000, 0x1FE0, 0x1FE0, 0x6060, 0x6060, 0x6060,
    0x6060, 0x1FE0, 0x1FE0, 0x0060, 0x0060, 0x0060, 0x0060, 0x0060, 0x0060,
    // 'r' (0x72)
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x6780, 0x6780, 0x7860,
    0x7860, 0x6000, 0x6000, 0x6000, 0x6000, 0x6000, 0x6000, 0x0000, 0x0000,
    // 's' (0x73)
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x1FE0, 0x1FE0, 0x6000,
    0x6000, 0x1F80, 0x1F80, 0x0060, 0x0060, 0x7F80, 0x7F80, 0x0000, 0x0000,
    // 't' (0x74)
    0x0000, 0x0000, 0x1800, 0x1800, 0x1800, 0x1800, 0x7E00, 0x7E00, 0x1800,
    0x1800, 0x1800, 0x1800, 0x1860, 0x1860, 0x0780, 0x0780, 0x0000, 0x0000,
    // 'u' (0x75)
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x6060, 0x6060, 0x6060,
    0x6060, 0x6060, 0x6060, 0x61E0, 0x61E0, 0x1E60, 0x1E60, 0x0000, 0x0000,
    // 'v' (0x76)
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x6060, 0x6060, 0x6060,
    0x6060, 0x6060, 0x6060, 0x1980, 0x1980, 0x0600, 0x0600, 0x0000, 0x0000,
    // 'w' (0x77)
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x6060, 0x6060, 0x6660,
    0x6660, 0x6660, 0x6660, 0x6660, 0x6660, 0x1980, 0x1980, 0x0000, 0x0000,
    // 'x' (0x78)
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x6060, 0x6060, 0x1980,
    0x1980, 0x0600, 0x0600, 0x1980, 0x1980, 0x6060, 0x6060, 0x0000, 0x0000,
    // 'y' (0x79)
    0x0000, 0x0000, 0x0000, 0x0000, 0x6060, 0x6060, 0x6060, 0x6060, 0x6060,
    0x6060, 0x1FE0, 0x1FE0, 0x0060, 0x0060, 0x6060, 0x6060, 0x1F80, 0x1F80,
    // 'z' (0x7A)
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x7FE0, 0x7FE0, 0x0180,
    0x0180, 0x0600, 0x0600, 0x1800, 0x1800, 0x7FE0, 0x7FE0, 0x0000, 0x0000,
    // '{' (0x7B)
    0x0000, 0x0000, 0x01E0, 0x01E0, 0x0600, 0x0600, 0x0600, 0x0600, 0x1800,
    0x1800, 0x0600, 0x0600, 0x0600, 0x0600, 0x01E0, 0x01E0, 0x0000, 0x0000,
    // '|' (0x7C)
    0x0000, 0x0000, 0x0600, 0x0600, 0x0600, 0x0600, 0x0600, 0x0600, 0x0600,
    0x0600, 0x0600, 0x0600, 0x0600, 0x0600, 0x0600, 0x0600, 0x0000, 0x0000,
    // '}' (0x7D)
    0x0000, 0x0000, 0x7800, 0x7800, 0x0600, 0x0600, 0x0600, 0x0600, 0x0180,
    0x0180, 0x0600, 0x0600, 0x0600, 0x0600, 0x7800, 0x7800, 0x0000, 0x0000,
    // '~' (0x7E)
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x1E60, 0x1E60, 0x6780,
    0x6780, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    // DEL (0x7F)
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrow_rows_normalize_to_the_high_byte() {
        // Space is an empty cell.
        for row in 0..10 {
            assert_eq!(FONT_7X10.glyph_row(' ', row), Some(0));
        }
        // 'A' has ink somewhere.
        assert!((0..10).any(|row| FONT_7X10.glyph_row('A', row).unwrap() != 0));
        // Narrow rows occupy the upper byte only.
        for row in 0..10 {
            assert_eq!(FONT_7X10.glyph_row('W', row).unwrap() & 0x00FF, 0);
        }
    }

    #[test]
    fn wide_rows_are_taken_verbatim() {
        assert!((0..18).any(|row| FONT_11X18.glyph_row('0', row).unwrap() != 0));
    }

    #[test]
    fn characters_outside_the_table_have_no_rows() {
        assert_eq!(FONT_7X10.glyph_row('\x1f', 0), None);
        assert_eq!(FONT_7X10.glyph_row('\u{0080}', 0), None);
        assert_eq!(FONT_11X18.glyph_row('\u{1F600}', 0), None);
    }

    #[test]
    fn tables_cover_all_96_printable_characters() {
        for code in 0x20u8..0x80 {
            assert!(FONT_7X10.glyph_row(code as char, 9).is_some());
            assert!(FONT_11X18.glyph_row(code as char, 17).is_some());
        }
    }
}
