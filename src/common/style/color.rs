use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::common::{Error, Result};

/// RGB color representation.
///
/// Serialized as a six-digit hex string (`"D9D9D9"`), which is also how both
/// DrawingML and SpreadsheetML spell colors.
///
/// # Examples
///
/// ```rust
/// use deckbook::common::RgbColor;
///
/// let gray = RgbColor::from_hex("#D9D9D9").unwrap();
/// assert_eq!(gray, RgbColor::new(0xD9, 0xD9, 0xD9));
/// assert_eq!(gray.to_argb_hex(), "FFD9D9D9");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl RgbColor {
    pub const BLACK: RgbColor = RgbColor::new(0, 0, 0);
    pub const WHITE: RgbColor = RgbColor::new(0xFF, 0xFF, 0xFF);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create an RGB color from a hex string such as `"FF0000"` or `"#FF0000"`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

        Some(Self::new(r, g, b))
    }

    /// Uppercase hex string without `#`, as `srgbClr/@val` wants it.
    pub fn to_hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Opaque ARGB hex string, as SpreadsheetML `rgb` attributes want it.
    pub fn to_argb_hex(&self) -> String {
        format!("FF{}", self.to_hex())
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}

impl FromStr for RgbColor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s).ok_or_else(|| Error::InvalidInput(format!("invalid RGB color '{s}'")))
    }
}

impl Serialize for RgbColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for RgbColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid RGB color '{s}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        assert_eq!(RgbColor::from_hex("FF8000"), Some(RgbColor::new(255, 128, 0)));
        assert_eq!(RgbColor::from_hex("#0000ff"), Some(RgbColor::new(0, 0, 255)));
        assert_eq!(RgbColor::from_hex("FFF"), None);
        assert_eq!(RgbColor::from_hex("GG0000"), None);
    }

    #[test]
    fn test_hex_output() {
        let color = RgbColor::new(0x12, 0xAB, 0x0F);
        assert_eq!(color.to_hex(), "12AB0F");
        assert_eq!(color.to_argb_hex(), "FF12AB0F");
        assert_eq!(color.to_string(), "#12AB0F");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("not a color".parse::<RgbColor>().is_err());
        assert_eq!("#FFFFFF".parse::<RgbColor>().unwrap(), RgbColor::WHITE);
    }
}
