//! This module holds the textual side of the crate: the recognized color grammars and the error
//! produced when none of them apply. Recognition is dispatch over a handful of patterns, not a
//! true grammar parser: strip all whitespace, then probe hex, `hsv()`/`hsva()`, `hsl()`/
//! `hsla()`, and finally the `rgb()`/`rgba()` form that a named-color resolver hands back. The
//! patterns deliberately mirror a permissive lineage: searches are unanchored, a malformed hex
//! run falls back to opaque black instead of failing, and garbage numbers are coerced rather
//! than rejected. Only color *syntax* that matches nothing at all is an error, and even that is
//! raised by the caller once the resolver has had its chance.

use std::error::Error;
use std::fmt;

use regex::Regex;

lazy_static! {
    // the first run of hex digits anywhere in the text, any length
    static ref HEX_RUN: Regex = Regex::new(r"(?i)[0-9a-f]+").unwrap();
    // integer degrees, integer percents, optional decimal alpha; unanchored on purpose
    static ref HSV_PATTERN: Regex =
        Regex::new(r"hsva?\((\d+),(\d+)%,(\d+)%,?([0-9.]+)?\)").unwrap();
    static ref HSL_PATTERN: Regex =
        Regex::new(r"hsla?\((\d+),(\d+)%,(\d+)%,?([0-9.]+)?\)").unwrap();
    // the resolver's output grammar: an integer triplet in 0-255 plus optional decimal alpha
    static ref RGB_PATTERN: Regex =
        Regex::new(r"rgba?\((\d+),(\d+),(\d+),?([0-9.]+)?\)").unwrap();
}

/// An error in reading a color from text. There is only one failure kind by design: every
/// malformed *number* is silently clamped or coerced, so the sole way to fail is handing in
/// syntax that matches no grammar at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// The text matched none of the recognized grammars, and the named-color resolver (if any)
    /// could not make sense of it either. Carries the offending text.
    UnrecognizedColor(String),
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ColorParseError::UnrecognizedColor(ref text) => {
                write!(f, "can't parse color from string: {:?}", text)
            }
        }
    }
}

impl Error for ColorParseError {
    fn description(&self) -> &str {
        "unparseable color text"
    }
}

/// Removes every whitespace character from the text. All the grammars operate on stripped text,
/// including the resolver's output.
pub fn strip_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Finds the first run of hex digits in the text and expands it to the canonical 8 lowercase
/// digits: 3 digits gain an alpha digit and re-expand, 4 digits double each digit, 6 digits gain
/// an opaque alpha pair, 8 pass through. Any other run length, or no hex digits at all, falls
/// back to opaque black. This can't fail: hex input is maximally permissive.
pub fn expand_hex(text: &str) -> String {
    let stripped = strip_whitespace(text);
    let digits = match HEX_RUN.find(&stripped) {
        Some(found) => found.as_str().to_lowercase(),
        None => String::from("000"),
    };
    expand_digits(&digits)
}

fn expand_digits(digits: &str) -> String {
    match digits.len() {
        // shorthand alpha first, so #abc becomes #abcf becomes #aabbccff
        3 => expand_digits(&format!("{}f", digits)),
        4 => digits.chars().flat_map(|c| vec![c, c]).collect(),
        6 => format!("{}ff", digits),
        8 => digits.to_string(),
        _ => expand_digits("000"),
    }
}

/// Matches the `hsv(h,s%,v%)` / `hsva(h,s%,v%,a)` grammar against already-stripped text and
/// returns raw HSVA channels scaled into 0-1 space (degrees over 360, percents over 100). The
/// channels are not yet clamped; acceptance clamping happens at the store. A missing *or falsy*
/// alpha capture defaults to 1, so `hsva(...,0)` reads as opaque; this matches the notation's
/// lineage and is relied on by round-trip tests.
pub fn hsv_text(text: &str) -> Option<(f64, f64, f64, f64)> {
    functional_notation(&HSV_PATTERN, text)
}

/// Matches the `hsl(h,s%,l%)` / `hsla(h,s%,l%,a)` grammar, identical in shape to
/// [`hsv_text`](fn.hsv_text.html) including the falsy-alpha default.
pub fn hsl_text(text: &str) -> Option<(f64, f64, f64, f64)> {
    functional_notation(&HSL_PATTERN, text)
}

fn functional_notation(pattern: &Regex, text: &str) -> Option<(f64, f64, f64, f64)> {
    let caps = pattern.captures(text)?;
    let h = number(caps.get(1).map_or("", |m| m.as_str())) / 360.0;
    let s = number(caps.get(2).map_or("", |m| m.as_str())) / 100.0;
    let v = number(caps.get(3).map_or("", |m| m.as_str())) / 100.0;
    let a = match caps.get(4) {
        Some(found) => {
            let parsed = number(found.as_str());
            if parsed == 0.0 || parsed.is_nan() {
                1.0
            } else {
                parsed
            }
        }
        None => 1.0,
    };
    Some((h, s, v, a))
}

/// Matches the `rgb(r,g,b)` / `rgba(r,g,b,a)` grammar against already-stripped text and returns
/// raw RGBA channels with the integer triplet divided by 255. Unlike the hsv/hsl grammars, an
/// explicit alpha of 0 stays 0 here; only an absent alpha defaults to 1.
pub fn rgb_text(text: &str) -> Option<(f64, f64, f64, f64)> {
    let caps = RGB_PATTERN.captures(text)?;
    let r = number(caps.get(1).map_or("", |m| m.as_str())) / 255.0;
    let g = number(caps.get(2).map_or("", |m| m.as_str())) / 255.0;
    let b = number(caps.get(3).map_or("", |m| m.as_str())) / 255.0;
    let a = match caps.get(4) {
        Some(found) => number(found.as_str()),
        None => 1.0,
    };
    Some((r, g, b, a))
}

// A failed parse becomes NaN so the store's clamp coerces it to 0, keeping the
// garbage-numbers-never-abort policy in one place.
fn number(text: &str) -> f64 {
    text.parse().unwrap_or(::std::f64::NAN)
}
