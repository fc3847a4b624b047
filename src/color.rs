//! Flat RGB colors and the per-polygon palette.

/// A 3-channel pixel intensity, each channel in `0..=255`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

pub const BLACK: Color = Color::new(0, 0, 0);
pub const WHITE: Color = Color::new(255, 255, 255);
pub const CYAN: Color = Color::new(0, 255, 255);
pub const MAGENTA: Color = Color::new(255, 0, 255);

impl Color {
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Pack into ARGB8888 with an opaque alpha channel.
    #[inline]
    pub const fn to_argb(self) -> u32 {
        0xFF00_0000 | ((self.red as u32) << 16) | ((self.green as u32) << 8) | (self.blue as u32)
    }

    #[inline]
    pub const fn to_rgb(self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }
}

/// Flat fill color for polygon `index`.
///
/// A fixed pseudo-palette that keeps neighbouring polygons of one batch
/// visually distinct. Not a lighting model.
pub fn palette(index: usize) -> Color {
    let i = index as u64;
    Color {
        red: ((10 * i + 10) % 256) as u8,
        green: ((40 * i + 20) % 256) as u8,
        blue: ((70 * i + 30) % 256) as u8,
    }
}
