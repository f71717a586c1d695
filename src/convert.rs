//! This module is the pure conversion engine between the HSV canonical space and its sibling
//! views: RGB, HSL, and hex text. Every function here is total over the clamped 0-1 input domain
//! and completely stateless, so the subtle numeric edge cases (achromatic colors, saturation
//! denominators reaching zero, hue wrapping past red) can be tested in isolation from the
//! mutable color object that calls them.
//!
//! A note on the degenerate cases: a gray color has no meaningful hue, and a black or white one
//! has no meaningful HSL saturation. Wikipedia calls these undefined; here, as in most practical
//! implementations, they are fixed to 0 rather than left as NaN, and the round-trip tests below
//! depend on exactly that convention.

/// Converts HSV components to RGB, all in the 0-1 range. The hue is scaled to six hexagon
/// sectors, and the result is picked from an explicit 6-entry permutation table indexed by the
/// sector, which keeps the logic auditable next to any textbook statement of the algorithm. A
/// hue of exactly 1 wraps around to the red sector.
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    let h6 = h * 6.0;
    let i = h6.floor();
    let f = h6 - i;
    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    // one entry per 60-degree sector, starting at red
    let table = [
        (v, t, p),
        (q, v, p),
        (p, v, t),
        (p, q, v),
        (t, p, v),
        (v, p, q),
    ];
    table[(i as usize) % 6]
}

/// Converts RGB components to HSV, all in the 0-1 range. Value is the largest component, and
/// saturation is the chroma relative to it (0 when the color is black, which would otherwise
/// divide by zero). Hue comes from the standard 60-degree sector formula on whichever component
/// is largest, with the wrap for negative results folded into the red branch, and is normalized
/// into [0, 1) by dividing by 6. An achromatic color gets a hue of 0.
pub fn rgb_to_hsv(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let v = max;
    let s = if max == 0.0 { 0.0 } else { delta / max };
    let h = if max == min {
        0.0
    } else if max == r {
        ((g - b) / delta + if g < b { 6.0 } else { 0.0 }) / 6.0
    } else if max == g {
        ((b - r) / delta + 2.0) / 6.0
    } else {
        ((r - g) / delta + 4.0) / 6.0
    };
    (h, s, v)
}

/// Converts HSV saturation and value into HSL saturation and lightness. Hue and alpha are
/// identical between the two spaces and don't appear here. The saturation normalizer is the
/// doubled lightness below the midpoint and its mirror above it; when that normalizer is 0 (pure
/// black, or white where the chroma is 0 anyway) the saturation is 0, not NaN.
pub fn hsv_to_hsl(s: f64, v: f64) -> (f64, f64) {
    let l = (2.0 - s) * v;
    let normalizer = if l <= 1.0 { l } else { 2.0 - l };
    let s_hsl = if normalizer == 0.0 {
        0.0
    } else {
        s * v / normalizer
    };
    (s_hsl, l / 2.0)
}

/// Converts HSL saturation and lightness into HSV saturation and value: the inverse of
/// [`hsv_to_hsl`](fn.hsv_to_hsl.html). Lightness is scaled by 2, saturation is renormalized
/// against it, and the same zero-denominator guard applies: black maps to saturation 0 rather
/// than NaN.
pub fn hsl_to_hsv(s: f64, l: f64) -> (f64, f64) {
    let l2 = l * 2.0;
    let s2 = s * if l2 <= 1.0 { l2 } else { 2.0 - l2 };
    let s_hsv = if l2 + s2 == 0.0 {
        0.0
    } else {
        (2.0 * s2) / (l2 + s2)
    };
    (s_hsv, (l2 + s2) / 2.0)
}

/// Renders RGBA components in the 0-1 range as an 8-digit lowercase hex string with a leading
/// `#`. Each channel is scaled to 0-255 and rounded to the nearest integer. Shortening the
/// opaque form to 6 digits is a formatting concern and doesn't happen here.
pub fn rgb_to_hex(r: f64, g: f64, b: f64, a: f64) -> String {
    format!(
        "#{:02x}{:02x}{:02x}{:02x}",
        (r * 255.0).round() as u8,
        (g * 255.0).round() as u8,
        (b * 255.0).round() as u8,
        (a * 255.0).round() as u8
    )
}

/// Parses exactly 8 hex digits (no `#`) into RGBA components in the 0-1 range: the inverse of
/// [`rgb_to_hex`](fn.rgb_to_hex.html). Callers hand this a pre-expanded digit run, which the
/// parsing layer guarantees.
///
/// # Panics
/// Panics when given fewer than 8 bytes of text.
pub fn hex_to_rgb(hex: &str) -> (f64, f64, f64, f64) {
    let byte = |i: usize| -> f64 {
        u8::from_str_radix(&hex[i..i + 2], 16)
            .map(f64::from)
            .unwrap_or(0.0) / 255.0
    };
    (byte(0), byte(2), byte(4), byte(6))
}
