use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tiny_skia::{ColorU8, PremultipliedColorU8};

use crate::error::{HeartError, Result};

/// One straight-alpha RGBA8 pixel, laid out as `ImageData` expects.
/// 4 bytes per pixel.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Parse `#rrggbb` (the leading `#` is optional).
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        let invalid = || HeartError::InvalidColor(hex.to_string());
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());
        Ok(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Premultiplied form, as stored in a `tiny_skia::Pixmap`.
    pub fn premultiply(self) -> PremultipliedColorU8 {
        ColorU8::from_rgba(self.r, self.g, self.b, self.a).premultiply()
    }
}

impl From<PremultipliedColorU8> for Rgba8 {
    fn from(p: PremultipliedColorU8) -> Self {
        let c = p.demultiply();
        Self::new(c.red(), c.green(), c.blue(), c.alpha())
    }
}

impl Serialize for Rgba8 {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgba8 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Rgba8::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::size_of;

    #[test]
    fn rgba8_is_4_bytes() {
        assert_eq!(size_of::<Rgba8>(), 4);
        let px = [Rgba8::rgb(1, 2, 3)];
        assert_eq!(bytemuck::cast_slice::<Rgba8, u8>(&px), &[1, 2, 3, 255]);
    }

    #[test]
    fn parse_hex() {
        assert_eq!(Rgba8::from_hex("#99ff99").unwrap(), Rgba8::rgb(0x99, 0xff, 0x99));
        assert_eq!(Rgba8::from_hex("FFCC99").unwrap(), Rgba8::rgb(0xff, 0xcc, 0x99));
        assert_eq!(Rgba8::rgb(0x99, 0xff, 0x99).to_hex(), "#99ff99");
    }

    #[test]
    fn reject_bad_hex() {
        for bad in ["", "#99ff9", "#99ff99aa", "#gg0000", "#ééé"] {
            assert!(
                matches!(Rgba8::from_hex(bad), Err(HeartError::InvalidColor(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn premultiply_round_trips_opaque_and_clear() {
        let green = Rgba8::rgb(0x99, 0xff, 0x99);
        assert_eq!(Rgba8::from(green.premultiply()), green);
        assert_eq!(Rgba8::from(Rgba8::TRANSPARENT.premultiply()), Rgba8::TRANSPARENT);

        let half = green.with_alpha(128).premultiply();
        assert_eq!(half.alpha(), 128);
        assert!(half.green() <= 128 && half.red() < half.green());
    }
}
