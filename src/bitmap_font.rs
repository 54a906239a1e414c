//! Fixed-size bitmap face used when no TrueType font can be loaded.

/// Glyph rows, most significant of the low five bits is the leftmost column.
type GlyphRows = [u8; 7];

/// A monospaced bitmap font with 5×7 glyphs.
#[derive(Debug)]
pub struct BitmapFont {
    /// Horizontal distance between glyph origins
    pub advance: u32,
    /// Blank rows between the top of the line and the glyph
    pub top_bearing: u32,
    glyphs: &'static [(char, GlyphRows)],
    notdef: GlyphRows,
}

pub const GLYPH_WIDTH: u32 = 5;
pub const GLYPH_HEIGHT: u32 = 7;

/// The built-in face.
pub static DEFAULT: BitmapFont = BitmapFont {
    advance: 6,
    top_bearing: 2,
    glyphs: &GLYPHS,
    notdef: [
        0b11111, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11111,
    ],
};

impl BitmapFont {
    fn rows(&self, ch: char) -> &GlyphRows {
        let ch = ch.to_ascii_uppercase();
        self.glyphs
            .iter()
            .find(|(c, _)| *c == ch)
            .map(|(_, rows)| rows)
            .unwrap_or(&self.notdef)
    }

    /// Inked pixels of `text`, relative to the top-left corner of the line.
    pub fn pixels<'a>(&'a self, text: &'a str) -> impl Iterator<Item = (u32, u32)> + 'a {
        text.chars().enumerate().flat_map(move |(i, ch)| {
            let rows = self.rows(ch);
            let pen_x = i as u32 * self.advance;
            (0..GLYPH_HEIGHT).flat_map(move |row| {
                (0..GLYPH_WIDTH)
                    .filter(move |&col| rows[row as usize] & (0b10000 >> col) != 0)
                    .map(move |col| (pen_x + col, self.top_bearing + row))
            })
        })
    }
}

#[rustfmt::skip]
static GLYPHS: [(char, GlyphRows); 27] = [
    (' ', [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000]),
    ('A', [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001]),
    ('B', [0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110]),
    ('C', [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110]),
    ('D', [0b11110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11110]),
    ('E', [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111]),
    ('F', [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000]),
    ('G', [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01111]),
    ('H', [0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001]),
    ('I', [0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110]),
    ('J', [0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100]),
    ('K', [0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001]),
    ('L', [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111]),
    ('M', [0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001]),
    ('N', [0b10001, 0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001]),
    ('O', [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110]),
    ('P', [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000]),
    ('Q', [0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101]),
    ('R', [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001]),
    ('S', [0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110]),
    ('T', [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100]),
    ('U', [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110]),
    ('V', [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100]),
    ('W', [0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b10101, 0b01010]),
    ('X', [0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001]),
    ('Y', [0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100]),
    ('Z', [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111]),
];
