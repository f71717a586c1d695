//! This module implements the HSV view with alpha: the canonical space of the crate. Value runs
//! from black to full saturation instead of black to white, which makes it a poor analog of
//! luminance but a natural fit for the picker-style use this crate serves, since hue and
//! saturation stay meaningful as a color darkens. Equality on this record is exact on all four
//! channels, and that exactness is load-bearing: change notification compares HSVA snapshots
//! with no epsilon, so floating noise in channels that did not change can't suppress or invent a
//! notification.

use std::str::FromStr;

use channel::clamp;
use convert;
use parse::{self, ColorParseError};
use spaces::{Hsla, Rgba};

/// An HSV color with alpha, every channel in the 0-1 range. For degree/percent readings use
/// `h * 360`, `s * 100`, `v * 100`.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hsva {
    /// The hue, as the fraction of a full turn around the HSV cylinder: 0 is red, 1/3 is green,
    /// 2/3 is blue. Conventionally 0 for achromatic colors.
    pub h: f64,
    /// The saturation, as the distance from the equivalent-value gray. 0 is gray, 1 is fully
    /// saturated.
    pub s: f64,
    /// The value, defined as the largest RGB primary of the color.
    pub v: f64,
    /// The alpha, where 0 is fully transparent and 1 is fully opaque.
    pub a: f64,
}

impl From<Rgba> for Hsva {
    fn from(rgba: Rgba) -> Hsva {
        let (h, s, v) = convert::rgb_to_hsv(rgba.r, rgba.g, rgba.b);
        Hsva { h, s, v, a: rgba.a }
    }
}

impl From<Hsla> for Hsva {
    fn from(hsla: Hsla) -> Hsva {
        let (s, v) = convert::hsl_to_hsv(hsla.s, hsla.l);
        Hsva {
            h: hsla.h,
            s,
            v,
            a: hsla.a,
        }
    }
}

impl FromStr for Hsva {
    type Err = ColorParseError;

    /// Reads the `hsv(h,s%,v%)` / `hsva(h,s%,v%,a)` notation: integer degrees, integer
    /// percents, optional decimal alpha (a falsy alpha reads as opaque). Whitespace anywhere is
    /// ignored and out-of-range channels clamp instead of failing.
    fn from_str(s: &str) -> Result<Hsva, ColorParseError> {
        let stripped = parse::strip_whitespace(s);
        match parse::hsv_text(&stripped) {
            Some((h, s, v, a)) => Ok(Hsva {
                h: clamp(h),
                s: clamp(s),
                v: clamp(v),
                a: clamp(a),
            }),
            None => Err(ColorParseError::UnrecognizedColor(s.to_string())),
        }
    }
}
