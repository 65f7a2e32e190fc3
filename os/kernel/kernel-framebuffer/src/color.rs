/// A 32-bit pixel value in `0x00RRGGBB` layout.
///
/// Stored little-endian, so in memory the bytes read B, G, R, X. This matches
/// the layout Limine reports for 32 bpp framebuffers (red at bit 16, green at
/// bit 8, blue at bit 0).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Color(u32);

impl Color {
    pub const BLACK: Self = Self(0x00_00_00);
    pub const WHITE: Self = Self(0xFF_FF_FF);
    pub const RED: Self = Self(0xFF_00_00);
    pub const GREEN: Self = Self(0x00_FF_00);
    pub const BLUE: Self = Self(0x00_00_FF);
    pub const YELLOW: Self = Self(0xFF_FF_00);

    #[must_use]
    pub const fn from_u32(value: u32) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    #[must_use]
    pub const fn as_u32(self) -> u32 {
        self.0
    }

    /// The four bytes of the pixel cell, in memory order.
    #[must_use]
    pub const fn to_cell(self) -> [u8; 4] {
        self.0.to_le_bytes()
    }

    /// Decode a pixel cell in memory order.
    #[must_use]
    pub const fn from_cell(cell: [u8; 4]) -> Self {
        Self(u32::from_le_bytes(cell))
    }
}

impl From<u32> for Color {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_packs_into_xrgb() {
        assert_eq!(Color::from_rgb(0xFF, 0, 0), Color::RED);
        assert_eq!(Color::from_rgb(0, 0xFF, 0), Color::GREEN);
        assert_eq!(Color::from_rgb(0, 0, 0xFF), Color::BLUE);
        assert_eq!(Color::from_rgb(0x12, 0x34, 0x56).as_u32(), 0x0012_3456);
    }

    #[test]
    fn cell_is_little_endian() {
        assert_eq!(Color::RED.to_cell(), [0x00, 0x00, 0xFF, 0x00]);
        assert_eq!(Color::from_cell([0x00, 0xFF, 0xFF, 0x00]), Color::YELLOW);
    }
}
