//! This module implements the HSL view with alpha, the bi-cone cousin of HSV: lightness runs
//! from black through full saturation in the middle to white at the end, where HSV's value stops
//! at full saturation. The two spaces share a hue axis exactly, so converting between them only
//! touches the other two channels, and both conversions hit a degenerate denominator at the
//! cone tips: black (and white, coming from HSV) gets a saturation of 0 by convention rather
//! than the NaN the raw identity would produce.

use std::str::FromStr;

use channel::clamp;
use convert;
use parse::{self, ColorParseError};
use spaces::Hsva;

/// An HSL color with alpha, every channel in the 0-1 range. For degree/percent readings use
/// `h * 360`, `s * 100`, `l * 100`.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hsla {
    /// The hue, identical to the HSV hue: the fraction of a full turn, conventionally 0 for
    /// achromatic colors.
    pub h: f64,
    /// The saturation, normalized against the lightness cone. Note that light colors can carry
    /// a high HSL saturation while sitting very close to white.
    pub s: f64,
    /// The lightness: 0 is black, 1/2 is the fully saturated band, 1 is white.
    pub l: f64,
    /// The alpha, where 0 is fully transparent and 1 is fully opaque.
    pub a: f64,
}

impl From<Hsva> for Hsla {
    fn from(hsva: Hsva) -> Hsla {
        let (s, l) = convert::hsv_to_hsl(hsva.s, hsva.v);
        Hsla {
            h: hsva.h,
            s,
            l,
            a: hsva.a,
        }
    }
}

impl FromStr for Hsla {
    type Err = ColorParseError;

    /// Reads the `hsl(h,s%,l%)` / `hsla(h,s%,l%,a)` notation, the same grammar as the HSV one
    /// down to the falsy-alpha-reads-as-opaque quirk.
    fn from_str(s: &str) -> Result<Hsla, ColorParseError> {
        let stripped = parse::strip_whitespace(s);
        match parse::hsl_text(&stripped) {
            Some((h, s, l, a)) => Ok(Hsla {
                h: clamp(h),
                s: clamp(s),
                l: clamp(l),
                a: clamp(a),
            }),
            None => Err(ColorParseError::UnrecognizedColor(s.to_string())),
        }
    }
}
