/// Packed colour as stored in the framebuffer: `0x??RRGGBB`.
///
/// The top byte is whatever the colour arithmetic left there; only the low
/// 24 bits are ever displayed.
pub type PackedColour = u32;

pub const BLACK: PackedColour = 0x000000;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    #[must_use]
    pub const fn from_packed(packed: PackedColour) -> Self {
        Self {
            r: (packed >> 16) as u8,
            g: (packed >> 8) as u8,
            b: packed as u8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_packed_splits_channels() {
        assert_eq!(
            Colour::from_packed(0x1E90FF),
            Colour {
                r: 0x1E,
                g: 0x90,
                b: 0xFF
            }
        );
    }

    #[test]
    fn test_from_packed_ignores_top_byte() {
        assert_eq!(Colour::from_packed(0xAB123456), Colour::from_packed(0x00123456));
    }

    #[test]
    fn test_black() {
        assert_eq!(Colour::from_packed(BLACK), Colour { r: 0, g: 0, b: 0 });
    }
}
