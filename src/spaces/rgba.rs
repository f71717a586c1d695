//! This module implements the RGB view with alpha. RGB is what the outside world mostly speaks
//! (hex notation is just RGB in a tighter coat) but it is never the stored form here: the
//! canonical value is HSV, and an RGBA record is derived from it on demand. The `FromStr` impl
//! reads the `rgb()`/`rgba()` notation with integer 0-255 channels, which is also the grammar a
//! named-color resolver is expected to answer in.

use std::str::FromStr;

use channel::clamp;
use convert;
use parse::{self, ColorParseError};
use spaces::Hsva;

/// An RGB color with alpha, every channel in the 0-1 range. For byte readings use `r * 255` and
/// friends.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    /// The red primary.
    pub r: f64,
    /// The green primary.
    pub g: f64,
    /// The blue primary.
    pub b: f64,
    /// The alpha, where 0 is fully transparent and 1 is fully opaque.
    pub a: f64,
}

impl Rgba {
    /// Renders this color as an 8-digit lowercase hex string with a leading `#`, alpha
    /// included.
    pub fn to_hex(&self) -> String {
        convert::rgb_to_hex(self.r, self.g, self.b, self.a)
    }
}

impl From<Hsva> for Rgba {
    fn from(hsva: Hsva) -> Rgba {
        let (r, g, b) = convert::hsv_to_rgb(hsva.h, hsva.s, hsva.v);
        Rgba { r, g, b, a: hsva.a }
    }
}

impl FromStr for Rgba {
    type Err = ColorParseError;

    /// Reads the `rgb(r,g,b)` / `rgba(r,g,b,a)` notation: an integer triplet in 0-255 and an
    /// optional decimal alpha. Unlike the hsv/hsl grammars an explicit alpha of 0 stays
    /// transparent; only an absent alpha defaults to opaque.
    fn from_str(s: &str) -> Result<Rgba, ColorParseError> {
        let stripped = parse::strip_whitespace(s);
        match parse::rgb_text(&stripped) {
            Some((r, g, b, a)) => Ok(Rgba {
                r: clamp(r),
                g: clamp(g),
                b: clamp(b),
                a: clamp(a),
            }),
            None => Err(ColorParseError::UnrecognizedColor(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_rgba_string_parsing() {
        let tomato: Rgba = "rgb(255, 99, 71)".parse().unwrap();
        assert_eq!(tomato.r, 1.0);
        assert!((tomato.g - 99.0 / 255.0).abs() <= 1e-9);
        assert!((tomato.b - 71.0 / 255.0).abs() <= 1e-9);
        assert_eq!(tomato.a, 1.0);

        let ghost: Rgba = "rgba(255, 99, 71, 0)".parse().unwrap();
        assert_eq!(ghost.a, 0.0);

        // channels past 255 clamp to full
        let hot: Rgba = "rgb(300, 0, 0)".parse().unwrap();
        assert_eq!(hot.r, 1.0);

        assert!("tomato".parse::<Rgba>().is_err());
    }

    #[test]
    fn test_rgba_hex_rendering() {
        let green = Rgba {
            r: 0.0,
            g: 0.5,
            b: 0.0,
            a: 1.0,
        };
        assert_eq!(green.to_hex(), "#008000ff");
    }

    #[test]
    fn test_rgba_from_hsva() {
        let blue = Rgba::from(Hsva {
            h: 2.0 / 3.0,
            s: 1.0,
            v: 1.0,
            a: 1.0,
        });
        assert!(blue.r.abs() <= 1e-9);
        assert!(blue.g.abs() <= 1e-9);
        assert!((blue.b - 1.0).abs() <= 1e-9);
    }
}
