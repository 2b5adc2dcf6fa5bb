//! Packed ARGB color for the demo surfaces.
//!
//! Every surface in this workspace consumes 32-bit ARGB8888 words
//! (`0xAARRGGBB`), the layout the demos' screen surfaces were created with.
//! Hex parsing accepts `"#rrggbb"` and forces alpha to opaque.

use crate::error::DemoError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A packed ARGB8888 color word (`0xAARRGGBB`).
///
/// Serializes as a hex string `"#rrggbb"` for human-readable formats.
/// The hex round-trip drops the alpha channel; parsed colors are always
/// fully opaque, which is the only alpha the demos use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Argb(pub u32);

impl Argb {
    /// Opaque black, the background every demo clears to.
    pub const BLACK: Argb = Argb(0xFF00_0000);
    /// Opaque white.
    pub const WHITE: Argb = Argb(0xFFFF_FFFF);

    /// Parses a hex color string like `"#ff00aa"` or `"ff00aa"` (case
    /// insensitive) into an opaque ARGB word.
    ///
    /// Returns `DemoError::InvalidColor` if the input is not a valid
    /// 6-digit hex color.
    pub fn from_hex(hex: &str) -> Result<Argb, DemoError> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 {
            return Err(DemoError::InvalidColor(format!(
                "expected 6 hex digits, got {}",
                hex.len()
            )));
        }
        let rgb = u32::from_str_radix(hex, 16)
            .map_err(|e| DemoError::InvalidColor(format!("invalid hex color: {e}")))?;
        Ok(Argb(0xFF00_0000 | rgb))
    }

    /// Converts the color to a hex string like `"#rrggbb"`, dropping alpha.
    pub fn to_hex(self) -> String {
        format!("#{:06x}", self.0 & 0x00FF_FFFF)
    }

    /// Alpha component.
    pub fn a(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Red component.
    pub fn r(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Green component.
    pub fn g(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Blue component.
    pub fn b(self) -> u8 {
        self.0 as u8
    }
}

impl Serialize for Argb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Argb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Argb::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_hex_parses_with_and_without_prefix() {
        assert_eq!(Argb::from_hex("#ff9315").unwrap(), Argb(0xFFFF_9315));
        assert_eq!(Argb::from_hex("ff9315").unwrap(), Argb(0xFFFF_9315));
    }

    #[test]
    fn from_hex_is_case_insensitive() {
        assert_eq!(
            Argb::from_hex("#AbCdEf").unwrap(),
            Argb::from_hex("#abcdef").unwrap()
        );
    }

    #[test]
    fn from_hex_forces_opaque_alpha() {
        assert_eq!(Argb::from_hex("#000000").unwrap().a(), 0xFF);
    }

    #[test]
    fn from_hex_rejects_wrong_length() {
        assert!(Argb::from_hex("#fff").is_err());
        assert!(Argb::from_hex("#1234567").is_err());
    }

    #[test]
    fn from_hex_rejects_non_hex_digits() {
        assert!(Argb::from_hex("#zzzzzz").is_err());
    }

    #[test]
    fn components_unpack_correctly() {
        let c = Argb(0xFF25_120C);
        assert_eq!(c.a(), 0xFF);
        assert_eq!(c.r(), 0x25);
        assert_eq!(c.g(), 0x12);
        assert_eq!(c.b(), 0x0C);
    }

    #[test]
    fn to_hex_round_trips_rgb() {
        let c = Argb::from_hex("#e16205").unwrap();
        assert_eq!(c.to_hex(), "#e16205");
    }

    #[test]
    fn serde_round_trips_as_hex_string() {
        let c = Argb(0xFFFF_B234);
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, "\"#ffb234\"");
        let back: Argb = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
    }

    #[test]
    fn deserialize_rejects_invalid_hex() {
        let result: Result<Argb, _> = serde_json::from_str("\"#nothex\"");
        assert!(result.is_err());
    }
}
