//! This module renders the stored color back into text. Eight names are understood, one per
//! view with and without an alpha suffix, and everything unrecognized quietly becomes hex: the
//! same permissiveness that governs input applies on the way out. The interesting rules all
//! concern alpha. It is rounded to two decimals before any non-hex rendering, the plain
//! `rgb`/`hsl`/`hsv` names suppress the alpha segment entirely when the color is opaque and
//! grow a trailing `a` when it isn't, and the explicitly suffixed names always render alpha no
//! matter its value. Hex shortens its trailing `ff` byte instead.

use spaces::{Hsla, Hsva, Rgba};

/// The textual renderings understood by [`Color::to_css`](../color/struct.Color.html). The
/// plain variants suppress alpha when it is 1; the `a`-suffixed variants always include it.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Format {
    /// 6-digit hex when opaque, 8-digit otherwise.
    Hex,
    /// Always 8-digit hex.
    Hexa,
    /// `rgb(r, g, b)`, growing into `rgba(...)` when translucent.
    Rgb,
    /// `rgba(r, g, b, a)` unconditionally.
    Rgba,
    /// `hsl(h, s%, l%)`, growing into `hsla(...)` when translucent.
    Hsl,
    /// `hsla(h, s%, l%, a)` unconditionally.
    Hsla,
    /// `hsv(h, s%, v%)`, growing into `hsva(...)` when translucent.
    Hsv,
    /// `hsva(h, s%, v%, a)` unconditionally.
    Hsva,
}

impl Format {
    /// Maps a format name to its variant. Anything unrecognized, including the empty string,
    /// defaults to [`Format::Hex`](enum.Format.html): an unknown format name is not an error.
    pub fn from_name(name: &str) -> Format {
        match name {
            "hexa" => Format::Hexa,
            "rgb" => Format::Rgb,
            "rgba" => Format::Rgba,
            "hsl" => Format::Hsl,
            "hsla" => Format::Hsla,
            "hsv" => Format::Hsv,
            "hsva" => Format::Hsva,
            _ => Format::Hex,
        }
    }
}

impl Default for Format {
    fn default() -> Format {
        Format::Hex
    }
}

/// Renders an HSVA snapshot in the requested format.
pub(crate) fn render(hsva: Hsva, format: Format) -> String {
    match format {
        Format::Hex => {
            let full = Rgba::from(hsva).to_hex();
            if full.ends_with("ff") {
                full[..7].to_string()
            } else {
                full
            }
        }
        Format::Hexa => Rgba::from(hsva).to_hex(),
        Format::Rgb | Format::Rgba => {
            let rgba = Rgba::from(hsva);
            functional(
                "rgb",
                byte(rgba.r),
                byte(rgba.g),
                byte(rgba.b),
                rgba.a,
                format == Format::Rgba,
            )
        }
        Format::Hsl | Format::Hsla => {
            let hsla = Hsla::from(hsva);
            functional(
                "hsl",
                degrees(hsla.h),
                percent(hsla.s),
                percent(hsla.l),
                hsla.a,
                format == Format::Hsla,
            )
        }
        Format::Hsv | Format::Hsva => functional(
            "hsv",
            degrees(hsva.h),
            percent(hsva.s),
            percent(hsva.v),
            hsva.a,
            format == Format::Hsva,
        ),
    }
}

fn functional(
    name: &str,
    first: String,
    second: String,
    third: String,
    alpha: f64,
    forced_alpha: bool,
) -> String {
    // two-decimal alpha, rounded before the opacity check so 0.999 counts as opaque
    let alpha = (alpha * 100.0).round() / 100.0;
    if forced_alpha || alpha != 1.0 {
        format!("{}a({}, {}, {}, {})", name, first, second, third, alpha)
    } else {
        format!("{}({}, {}, {})", name, first, second, third)
    }
}

fn degrees(h: f64) -> String {
    format!("{}", (h * 360.0).round())
}

fn percent(channel: f64) -> String {
    format!("{}%", (channel * 100.0).round())
}

fn byte(channel: f64) -> String {
    format!("{}", (channel * 255.0).round())
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    fn opaque_green() -> Hsva {
        Hsva {
            h: 1.0 / 3.0,
            s: 1.0,
            v: 0.5,
            a: 1.0,
        }
    }

    #[test]
    fn test_from_name_defaults_to_hex() {
        assert_eq!(Format::from_name("hsva"), Format::Hsva);
        assert_eq!(Format::from_name("hex"), Format::Hex);
        assert_eq!(Format::from_name("oklch"), Format::Hex);
        assert_eq!(Format::from_name(""), Format::Hex);
    }

    #[test]
    fn test_hex_shortens_opaque_alpha() {
        assert_eq!(render(opaque_green(), Format::Hex), "#008000");
        assert_eq!(render(opaque_green(), Format::Hexa), "#008000ff");

        let translucent = Hsva { a: 0.5, ..opaque_green() };
        assert_eq!(render(translucent, Format::Hex), "#00800080");
    }

    #[test]
    fn test_alpha_suppression_on_plain_names() {
        assert_eq!(render(opaque_green(), Format::Rgb), "rgb(0, 128, 0)");
        let translucent = Hsva { a: 0.5, ..opaque_green() };
        assert_eq!(render(translucent, Format::Rgb), "rgba(0, 128, 0, 0.5)");
    }

    #[test]
    fn test_suffixed_names_always_render_alpha() {
        assert_eq!(render(opaque_green(), Format::Rgba), "rgba(0, 128, 0, 1)");
        assert_eq!(render(opaque_green(), Format::Hsva), "hsva(120, 100%, 50%, 1)");
    }

    #[test]
    fn test_alpha_rounds_to_two_decimals() {
        let nearly_opaque = Hsva { a: 0.999, ..opaque_green() };
        // 0.999 rounds to 1.00, which counts as opaque
        assert_eq!(render(nearly_opaque, Format::Rgb), "rgb(0, 128, 0)");

        let third = Hsva { a: 1.0 / 3.0, ..opaque_green() };
        assert_eq!(render(third, Format::Rgba), "rgba(0, 128, 0, 0.33)");
    }

    #[test]
    fn test_hsl_rendering() {
        // hsv(120, 100%, 50%) is hsl(120, 100%, 25%)
        assert_eq!(render(opaque_green(), Format::Hsl), "hsl(120, 100%, 25%)");
    }

    #[test]
    fn test_hsv_rendering() {
        assert_eq!(render(opaque_green(), Format::Hsv), "hsv(120, 100%, 50%)");
    }
}
