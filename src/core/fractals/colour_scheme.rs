use std::fmt;

const SCHEMES: [(u32, &str); 8] = [
    (0x045611, "Deep green"),
    (0x1E90FF, "Dodger blue"),
    (0x8A2BE2, "Blue violet"),
    (0xFF4500, "Orange red"),
    (0x00FF7F, "Spring green"),
    (0xFFD700, "Gold"),
    (0xFF1493, "Deep pink"),
    (0x00CED1, "Dark turquoise"),
];

pub const COLOUR_SCHEME_COUNT: usize = SCHEMES.len();

/// Index into the fixed palette set; always in `0..COLOUR_SCHEME_COUNT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColourScheme(usize);

impl ColourScheme {
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index % COLOUR_SCHEME_COUNT)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }

    #[must_use]
    pub const fn next(self) -> Self {
        Self::new(self.0 + 1)
    }

    /// Per-iteration colour step. Multiplied with wrapping arithmetic.
    #[must_use]
    pub const fn multiplier(self) -> u32 {
        SCHEMES[self.0].0
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        SCHEMES[self.0].1
    }
}

impl fmt::Display for ColourScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
