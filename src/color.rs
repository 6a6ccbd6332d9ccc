//! RGBA colour carried alongside each oscillator and the trace.

use crate::errors::EpicycleError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Straight (non-premultiplied) RGBA colour, each channel in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::new(1.0, 1.0, 1.0, 1.0);
    pub const BLACK: Rgba = Rgba::new(0.0, 0.0, 0.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    /// Channels quantized to 8 bits, clamped to the valid range.
    pub fn to_rgba8(&self) -> [u8; 4] {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }

    /// `#rrggbb` form, alpha dropped (useful for SVG `stroke`).
    pub fn to_hex_rgb(&self) -> String {
        let [r, g, b, _] = self.to_rgba8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::WHITE
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b, a] = self.to_rgba8();
        write!(f, "#{r:02x}{g:02x}{b:02x}{a:02x}")
    }
}

impl FromStr for Rgba {
    type Err = EpicycleError;

    /// Parses `#rrggbb` or `#rrggbbaa` (leading `#` optional).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || EpicycleError::InvalidColor(s.to_string());
        let hex = s.trim().trim_start_matches('#');
        if !(hex.len() == 6 || hex.len() == 8) || !hex.is_ascii() {
            return Err(invalid());
        }

        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        let r = channel(0)?;
        let g = channel(2)?;
        let b = channel(4)?;
        let a = if hex.len() == 8 { channel(6)? } else { 255 };

        Ok(Self::from_rgba8(r, g, b, a))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_short_and_long_hex() {
        let c: Rgba = "#ff8000".parse().unwrap();
        assert_eq!(c.to_rgba8(), [255, 128, 0, 255]);

        let c: Rgba = "00ff0080".parse().unwrap();
        assert_eq!(c.to_rgba8(), [0, 255, 0, 128]);
    }

    #[test]
    fn rejects_malformed_hex() {
        assert!(matches!("#fff".parse::<Rgba>(), Err(EpicycleError::InvalidColor(_))));
        assert!("#gg0000".parse::<Rgba>().is_err());
        assert!("".parse::<Rgba>().is_err());
    }

    #[test]
    fn display_round_trips_through_parse() {
        let c = Rgba::from_rgba8(12, 34, 56, 78);
        assert_eq!(c.to_string(), "#0c22384e");
        assert_eq!(c.to_string().parse::<Rgba>().unwrap(), c);
        assert_eq!(c.to_hex_rgb(), "#0c2238");
    }
}
