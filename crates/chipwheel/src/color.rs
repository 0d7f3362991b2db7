use palette::{FromColor, Mix, Oklab, Srgb, Srgba};
use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorError {
    #[error("Invalid hex color '{0}'")]
    InvalidHex(String),
}

/// A straight-alpha sRGB color, written in config files as `#rgb`,
/// `#rrggbb` or `#rrggbbaa`.
#[derive(Debug, Clone, Copy, PartialEq, DeserializeFromStr, SerializeDisplay)]
pub struct Rgba(Srgba<f64>);

impl Rgba {
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self(Srgba::new(r, g, b, a))
    }

    pub fn black() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    pub fn white() -> Self {
        Self::new(1.0, 1.0, 1.0, 1.0)
    }

    pub fn components(&self) -> (f64, f64, f64, f64) {
        self.0.into_components()
    }

    pub fn alpha(&self) -> f64 {
        self.0.alpha
    }

    pub fn with_alpha(self, alpha: f64) -> Self {
        let (r, g, b, _) = self.components();
        Self::new(r, g, b, alpha.clamp(0.0, 1.0))
    }

    /// Mixes with transparency: keeps `share` of the current opacity.
    pub fn fade(self, share: f64) -> Self {
        let alpha = self.alpha() * share;
        self.with_alpha(alpha)
    }

    /// Perceptual mix in Oklab keeping `share` of `self` and the rest of `other`.
    pub fn mix_oklab(self, other: Rgba, share: f64) -> Self {
        let share = share.clamp(0.0, 1.0);
        let a = Oklab::<f64>::from_color(self.0.color);
        let b = Oklab::<f64>::from_color(other.0.color);
        let rgb = Srgb::<f64>::from_color(a.mix(b, 1.0 - share));
        let alpha = self.alpha() * share + other.alpha() * (1.0 - share);
        Self(Srgba::new(rgb.red, rgb.green, rgb.blue, alpha))
    }
}

impl From<Srgba<f64>> for Rgba {
    fn from(color: Srgba<f64>) -> Self {
        Self(color)
    }
}

impl From<Rgba> for Srgba<f64> {
    fn from(color: Rgba) -> Self {
        color.0
    }
}

impl FromStr for Rgba {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ColorError::InvalidHex(s.to_string());
        let hex = s.trim().trim_start_matches('#');
        if !hex.is_ascii() {
            return Err(invalid());
        }

        let (rgb_hex, alpha) = match hex.len() {
            3 | 6 => (hex, 1.0),
            8 => {
                let a = u8::from_str_radix(&hex[6..], 16).map_err(|_| invalid())?;
                (&hex[..6], a as f64 / 255.0)
            }
            _ => return Err(invalid()),
        };

        let rgb: Srgb<u8> = rgb_hex.parse().map_err(|_| invalid())?;
        let rgb = rgb.into_format::<f64>();
        Ok(Self::new(rgb.red, rgb.green, rgb.blue, alpha))
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let to_byte = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        let (r, g, b, a) = self.components();
        write!(
            f,
            "#{:02x}{:02x}{:02x}{:02x}",
            to_byte(r),
            to_byte(g),
            to_byte(b),
            to_byte(a)
        )
    }
}
