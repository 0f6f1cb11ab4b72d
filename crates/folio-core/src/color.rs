//! 24-bit RGB colors used by the theme.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::ColorError;

/// An opaque RGB color.
///
/// Formats as lowercase, zero-padded `#rrggbb` so the output is always a
/// valid CSS color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Builds a color from a packed `0xRRGGBB` value. Bits above 24 are ignored.
    pub const fn from_u32(packed: u32) -> Self {
        Self {
            r: ((packed >> 16) & 0xff) as u8,
            g: ((packed >> 8) & 0xff) as u8,
            b: (packed & 0xff) as u8,
        }
    }

    pub const fn to_u32(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Lightens (positive) or darkens (negative) every channel by `amount`,
    /// clamping each channel to `0..=255`.
    pub fn lumen(self, amount: i16) -> Self {
        let shift = |c: u8| (c as i16 + amount).clamp(0, 255) as u8;
        Self {
            r: shift(self.r),
            g: shift(self.g),
            b: shift(self.b),
        }
    }

    /// A uniformly random color below pure white.
    pub fn random_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::from_u32(rng.random_range(0..0xff_ffff))
    }

    pub fn random() -> Self {
        Self::random_with(&mut rand::rng())
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidDigit(s.to_string()));
        }

        match hex.len() {
            6 => u32::from_str_radix(hex, 16)
                .map(Self::from_u32)
                .map_err(|_| ColorError::InvalidDigit(s.to_string())),
            3 => {
                // #rgb expands each digit: #abc -> #aabbcc
                let expanded: String = hex.chars().flat_map(|c| [c, c]).collect();
                u32::from_str_radix(&expanded, 16)
                    .map(Self::from_u32)
                    .map_err(|_| ColorError::InvalidDigit(s.to_string()))
            }
            n => Err(ColorError::InvalidLength(n)),
        }
    }
}

impl From<Rgb> for String {
    fn from(color: Rgb) -> Self {
        color.to_string()
    }
}

impl TryFrom<String> for Rgb {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_display_is_zero_padded() {
        assert_eq!(Rgb::new(0, 0, 0).to_string(), "#000000");
        assert_eq!(Rgb::new(1, 2, 3).to_string(), "#010203");
        assert_eq!(Rgb::from_u32(0x6b86f9).to_string(), "#6b86f9");
    }

    #[test]
    fn test_parse_variants() {
        assert_eq!("#6b86f9".parse::<Rgb>().unwrap(), Rgb::new(0x6b, 0x86, 0xf9));
        assert_eq!("6B86F9".parse::<Rgb>().unwrap(), Rgb::new(0x6b, 0x86, 0xf9));
        assert_eq!("#fff".parse::<Rgb>().unwrap(), Rgb::new(255, 255, 255));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("#12345".parse::<Rgb>(), Err(ColorError::InvalidLength(5)));
        assert!(matches!("#zzzzzz".parse::<Rgb>(), Err(ColorError::InvalidDigit(_))));
        assert!(matches!("+12345".parse::<Rgb>(), Err(ColorError::InvalidDigit(_))));
    }

    #[test]
    fn test_lumen_clamps() {
        let c = Rgb::new(250, 10, 128);
        assert_eq!(c.lumen(25), Rgb::new(255, 35, 153));
        assert_eq!(c.lumen(-20), Rgb::new(230, 0, 108));
        assert_eq!(c.lumen(0), c);
    }

    #[test]
    fn test_random_is_deterministic_with_seed() {
        let a = Rgb::random_with(&mut StdRng::seed_from_u64(7));
        let b = Rgb::random_with(&mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
        assert!(a.to_u32() < 0xff_ffff);
    }

    #[test]
    fn test_serde_as_hex_string() {
        let json = serde_json::to_string(&Rgb::new(0x12, 0x34, 0x56)).unwrap();
        assert_eq!(json, "\"#123456\"");
        let back: Rgb = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Rgb::new(0x12, 0x34, 0x56));
        assert!(serde_json::from_str::<Rgb>("\"nope\"").is_err());
    }
}
