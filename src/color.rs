//! This module implements the color object itself: one mutable value, stored canonically as
//! HSV plus alpha, with every other representation derived on read. Mutation runs one fixed
//! sequence — normalize the inputs, derive a full HSVA, snapshot the previous one, commit,
//! compare, and fire `"change"` only if the value really moved — which keeps the notification
//! invariant (listeners hear about logical changes, nothing else) auditable in one place.
//! Everything is synchronous and single-threaded; no operation suspends, retries, or leaves a
//! partial state behind.

use std::fmt;
use std::str::FromStr;

use channel::{clamp, Scalar};
use convert;
use event::{EventEmitter, ListenerId};
use format::{self, Format};
use parse::{self, ColorParseError};
use spaces::{Hsla, Hsva, Rgba};

/// The last-resort collaborator for text the built-in grammars don't recognize: given the
/// stripped input, it either answers with an `rgb(r,g,b)` / `rgba(r,g,b,a)` string (a host
/// style engine's computed value, a keyword table, whatever the host has) or reports failure
/// with `None`. The core never assumes one is present.
pub type NamedColorResolver = Box<dyn Fn(&str) -> Option<String>>;

/// A single mutable color value. The canonical form is HSV with alpha, each channel held in the
/// 0-1 range at all times; HSL, RGB, and hex are views computed on demand. Mutators clamp
/// anything numeric, chain by returning `&mut Self`, and fire the `"change"` event exactly when
/// the stored value actually moved.
///
/// # Example
/// ```
/// # use vermilion::prelude::*;
/// let mut color: Color = "hsv(120, 100%, 50%)".parse().unwrap();
/// assert_eq!(color.to_string(), "#008000");
/// color.from_rgb(1.0, 0.0, 0.0);
/// assert_eq!(color.to_css(Format::Rgb), "rgb(255, 0, 0)");
/// ```
pub struct Color {
    h: f64,
    s: f64,
    v: f64,
    a: f64,
    emitter: EventEmitter,
    resolver: Option<NamedColorResolver>,
}

impl Color {
    /// Creates the default color: opaque black.
    pub fn new() -> Color {
        Color {
            h: 0.0,
            s: 0.0,
            v: 0.0,
            a: 1.0,
            emitter: EventEmitter::new(),
            resolver: None,
        }
    }

    /// Injects the named-color resolver consulted by
    /// [`from_string`](struct.Color.html#method.from_string) when no built-in grammar matches.
    /// Without one, unrecognized text is simply an error.
    pub fn set_resolver<F>(&mut self, resolver: F) -> &mut Color
    where
        F: Fn(&str) -> Option<String> + 'static,
    {
        self.resolver = Some(Box::new(resolver));
        self
    }

    // Commits already-clamped HSVA channels and fires "change" against the given snapshot. All
    // mutators funnel through here so the notify-iff-different rule can't drift.
    fn commit(&mut self, before: Hsva, h: f64, s: f64, v: f64, a: f64) -> &mut Color {
        self.h = h;
        self.s = s;
        self.v = v;
        self.a = a;
        if self.to_hsv() != before {
            self.trigger("change");
        }
        self
    }

    /// Sets the color from HSV channels, resetting alpha to opaque. Channels take any scalar
    /// type and clamp into 0-1; non-numeric values coerce to 0.
    pub fn from_hsv<H, S, V>(&mut self, h: H, s: S, v: V) -> &mut Color
    where
        H: Scalar,
        S: Scalar,
        V: Scalar,
    {
        self.from_hsva(h, s, v, 1.0)
    }

    /// Sets the color from HSV channels plus alpha. Channels take any scalar type and clamp
    /// into 0-1; non-numeric values coerce to 0.
    pub fn from_hsva<H, S, V, A>(&mut self, h: H, s: S, v: V, a: A) -> &mut Color
    where
        H: Scalar,
        S: Scalar,
        V: Scalar,
        A: Scalar,
    {
        let before = self.to_hsv();
        let (h, s, v, a) = (clamp(h), clamp(s), clamp(v), clamp(a));
        self.commit(before, h, s, v, a)
    }

    /// Sets the color from HSL channels, resetting alpha to opaque.
    pub fn from_hsl<H, S, L>(&mut self, h: H, s: S, l: L) -> &mut Color
    where
        H: Scalar,
        S: Scalar,
        L: Scalar,
    {
        self.from_hsla(h, s, l, 1.0)
    }

    /// Sets the color from HSL channels plus alpha, converting through the canonical HSV form.
    pub fn from_hsla<H, S, L, A>(&mut self, h: H, s: S, l: L, a: A) -> &mut Color
    where
        H: Scalar,
        S: Scalar,
        L: Scalar,
        A: Scalar,
    {
        let before = self.to_hsv();
        let (h, a) = (clamp(h), clamp(a));
        let (s, v) = convert::hsl_to_hsv(clamp(s), clamp(l));
        self.commit(before, h, s, v, a)
    }

    /// Sets the color from RGB channels, resetting alpha to opaque.
    pub fn from_rgb<R, G, B>(&mut self, r: R, g: G, b: B) -> &mut Color
    where
        R: Scalar,
        G: Scalar,
        B: Scalar,
    {
        self.from_rgba(r, g, b, 1.0)
    }

    /// Sets the color from RGB channels plus alpha, converting through the canonical HSV form.
    pub fn from_rgba<R, G, B, A>(&mut self, r: R, g: G, b: B, a: A) -> &mut Color
    where
        R: Scalar,
        G: Scalar,
        B: Scalar,
        A: Scalar,
    {
        let before = self.to_hsv();
        let a = clamp(a);
        let (h, s, v) = convert::rgb_to_hsv(clamp(r), clamp(g), clamp(b));
        self.commit(before, h, s, v, a)
    }

    /// Sets the color from hex text: `#rgb`, `#rgba`, `#rrggbb`, or `#rrggbbaa`, with or
    /// without the `#`, case and whitespace ignored. This never fails — anything that isn't a
    /// well-formed hex run reads as opaque black.
    pub fn from_hex(&mut self, text: &str) -> &mut Color {
        let digits = parse::expand_hex(text);
        let (r, g, b, a) = convert::hex_to_rgb(&digits);
        self.from_rgba(r, g, b, a)
    }

    /// Sets the color from any recognized notation, trying in order: hex (leading `#`),
    /// `hsv()`/`hsva()`, `hsl()`/`hsla()`, and finally the injected named-color resolver, whose
    /// answer must be in `rgb()`/`rgba()` notation. Empty text is a successful no-op. Text that
    /// exhausts every grammar is the one parse failure this crate has, and it leaves the prior
    /// value untouched.
    pub fn from_string(&mut self, text: &str) -> Result<&mut Color, ColorParseError> {
        let stripped = parse::strip_whitespace(text);
        if stripped.is_empty() {
            return Ok(self);
        }
        if stripped.starts_with('#') {
            return Ok(self.from_hex(&stripped));
        }
        if let Ok(hsva) = stripped.parse::<Hsva>() {
            return Ok(self.from_hsva(hsva.h, hsva.s, hsva.v, hsva.a));
        }
        if let Ok(hsla) = stripped.parse::<Hsla>() {
            return Ok(self.from_hsla(hsla.h, hsla.s, hsla.l, hsla.a));
        }
        let resolved = match self.resolver {
            Some(ref resolve) => resolve(&stripped),
            None => None,
        };
        if let Some(answer) = resolved {
            let answer = parse::strip_whitespace(&answer);
            if let Ok(rgba) = answer.parse::<Rgba>() {
                return Ok(self.from_rgba(rgba.r, rgba.g, rgba.b, rgba.a));
            }
        }
        Err(ColorParseError::UnrecognizedColor(text.to_string()))
    }

    /// Returns the canonical HSVA value.
    pub fn to_hsv(&self) -> Hsva {
        Hsva {
            h: self.h,
            s: self.s,
            v: self.v,
            a: self.a,
        }
    }

    /// Returns the HSLA view, derived from the canonical value.
    pub fn to_hsl(&self) -> Hsla {
        Hsla::from(self.to_hsv())
    }

    /// Returns the RGBA view, derived from the canonical value.
    pub fn to_rgb(&self) -> Rgba {
        Rgba::from(self.to_hsv())
    }

    /// Returns the full 8-digit hex rendering, alpha included.
    pub fn to_hex(&self) -> String {
        self.to_rgb().to_hex()
    }

    /// Renders the color in the given format. The `Display` impl is shorthand for
    /// `to_css(Format::Hex)`; [`Format::from_name`](../format/enum.Format.html#method.from_name)
    /// covers callers holding a format *name* instead of a variant.
    pub fn to_css(&self, format: Format) -> String {
        format::render(self.to_hsv(), format)
    }

    /// Registers a callback for the given event name and returns its handle. Duplicates are
    /// allowed; each registration gets its own handle. The color itself only ever fires
    /// `"change"`, when a mutation actually moves the stored value.
    pub fn on<F>(&mut self, name: &str, callback: F) -> ListenerId
    where
        F: FnMut() + 'static,
    {
        self.emitter.on(name, Box::new(callback))
    }

    /// Removes the single registration with the given handle, leaving duplicates registered
    /// under other handles in place.
    pub fn off(&mut self, name: &str, id: ListenerId) -> &mut Color {
        self.emitter.off(name, id);
        self
    }

    /// Removes every callback registered for the given event name.
    pub fn off_all(&mut self, name: &str) -> &mut Color {
        self.emitter.off_all(name);
        self
    }

    /// Invokes the callbacks for the given event name synchronously, in registration order. A
    /// panicking callback propagates immediately and the callbacks after it do not run. A
    /// callback that needs to mutate this same color must reach it through its own shared
    /// handle (say an `Rc<RefCell<Color>>`); nothing here guards against a notification loop
    /// that never terminates.
    pub fn trigger(&mut self, name: &str) -> &mut Color {
        self.emitter.trigger(name);
        self
    }
}

impl Default for Color {
    fn default() -> Color {
        Color::new()
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    /// Builds a color from any notation [`from_string`](struct.Color.html#method.from_string)
    /// accepts. No resolver is attached yet, so named colors can't resolve here; construct,
    /// [`set_resolver`](struct.Color.html#method.set_resolver), then `from_string` for that.
    fn from_str(s: &str) -> Result<Color, ColorParseError> {
        let mut color = Color::new();
        color.from_string(s)?;
        Ok(color)
    }
}

impl fmt::Display for Color {
    /// The default rendering: hex, shortened to 6 digits when opaque.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_css(Format::Hex))
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Color")
            .field("h", &self.h)
            .field("s", &self.s)
            .field("v", &self.v)
            .field("a", &self.a)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn change_counter(color: &mut Color) -> Rc<Cell<u32>> {
        let fired = Rc::new(Cell::new(0));
        let counter = fired.clone();
        color.on("change", move || counter.set(counter.get() + 1));
        fired
    }

    #[test]
    fn test_default_is_opaque_black() {
        let color = Color::new();
        let hsva = color.to_hsv();
        assert_eq!((hsva.h, hsva.s, hsva.v, hsva.a), (0.0, 0.0, 0.0, 1.0));
        assert_eq!(color.to_string(), "#000000");
    }

    #[test]
    fn test_clamping_equivalence() {
        let mut wild = Color::new();
        let mut tame = Color::new();
        wild.from_rgb(2, -1, 0.5);
        tame.from_rgb(1, 0, 0.5);
        assert_eq!(wild.to_hsv(), tame.to_hsv());
    }

    #[test]
    fn test_hex_expansion_equivalence() {
        let mut short = Color::new();
        let mut long = Color::new();
        short.from_hex("#abc");
        long.from_hex("#aabbccff");
        assert_eq!(short.to_hsv(), long.to_hsv());

        short.from_hex("#abcd");
        long.from_hex("#aabbccdd");
        assert_eq!(short.to_hsv(), long.to_hsv());
    }

    #[test]
    fn test_junk_hex_reads_as_black() {
        let mut color = Color::new();
        color.from_hsv(0.5, 0.5, 0.5);
        color.from_hex("not hex at all");
        let hsva = color.to_hsv();
        assert_eq!((hsva.h, hsva.s, hsva.v, hsva.a), (0.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn test_change_fires_only_on_real_change() {
        let mut color = Color::new();
        let fired = change_counter(&mut color);

        // writing the current value back is not a change
        let current = color.to_hsv();
        color.from_hsva(current.h, current.s, current.v, current.a);
        assert_eq!(fired.get(), 0);

        // one mutation, one event
        color.from_hsv(0.2, 0.4, 0.6);
        assert_eq!(fired.get(), 1);

        // and self-assignment stays quiet afterwards too
        let current = color.to_hsv();
        color.from_hsva(current.h, current.s, current.v, current.a);
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn test_alpha_only_change_still_fires() {
        let mut color = Color::new();
        color.from_hsv(0.2, 0.4, 0.6);
        let fired = change_counter(&mut color);
        color.from_hsva(0.2, 0.4, 0.6, 0.5);
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn test_failed_parse_leaves_value_and_silence() {
        let mut color = Color::new();
        color.from_hsv(0.2, 0.4, 0.6);
        let before = color.to_hsv();
        let fired = change_counter(&mut color);

        assert!(color.from_string("blurple").is_err());
        assert_eq!(color.to_hsv(), before);
        assert_eq!(fired.get(), 0);
    }

    #[test]
    fn test_empty_text_is_a_noop() {
        let mut color = Color::new();
        color.from_hsv(0.2, 0.4, 0.6);
        let before = color.to_hsv();
        assert!(color.from_string("").is_ok());
        assert!(color.from_string("   ").is_ok());
        assert_eq!(color.to_hsv(), before);
    }

    #[test]
    fn test_resolver_is_the_last_resort() {
        let mut color = Color::new();
        color.set_resolver(|name| {
            if name == "rebeccapurple" {
                Some("rgb(102, 51, 153)".to_string())
            } else {
                None
            }
        });

        color.from_string("rebeccapurple").unwrap();
        assert_eq!(color.to_css(Format::Rgb), "rgb(102, 51, 153)");

        // the resolver saw its chance and passed; that's the unrecoverable case
        let before = color.to_hsv();
        assert!(color.from_string("blurple").is_err());
        assert_eq!(color.to_hsv(), before);
    }

    #[test]
    fn test_resolver_alpha_zero_survives() {
        let mut color = Color::new();
        color.set_resolver(|_| Some("rgba(0, 0, 0, 0)".to_string()));
        color.from_string("transparent").unwrap();
        assert_eq!(color.to_hsv().a, 0.0);
    }

    #[test]
    fn test_scenario_hsv_text_to_hex() {
        let color: Color = "hsv(120, 100%, 50%)".parse().unwrap();
        assert_eq!(color.to_hex(), "#008000ff");
        assert_eq!(color.to_string(), "#008000");
    }

    #[test]
    fn test_scenario_shorthand_hex_to_rgb_text() {
        let color: Color = "#f00".parse().unwrap();
        assert_eq!(color.to_css(Format::Rgb), "rgb(255, 0, 0)");
    }

    #[test]
    fn test_alpha_suppression_follows_opacity() {
        let mut color = Color::new();
        color.from_rgba(1.0, 0.0, 0.0, 0.5);
        assert_eq!(color.to_css(Format::Rgb), "rgba(255, 0, 0, 0.5)");
        color.from_rgb(1.0, 0.0, 0.0);
        assert_eq!(color.to_css(Format::Rgb), "rgb(255, 0, 0)");
    }

    #[test]
    fn test_plain_hsv_setter_resets_alpha() {
        let mut color = Color::new();
        color.from_hsva(0.1, 0.2, 0.3, 0.4);
        color.from_hsv(0.1, 0.2, 0.3);
        assert_eq!(color.to_hsv().a, 1.0);
    }

    #[test]
    fn test_format_parse_idempotence() {
        let mut color = Color::new();
        color.from_hsv(0.35, 0.55, 0.65);
        for &format in [Format::Hex, Format::Rgb, Format::Hsl, Format::Hsv].iter() {
            let once = color.to_css(format);
            let reparsed: Color = once.parse().unwrap();
            let twice = reparsed.to_css(format);
            assert_eq!(once, twice, "format {:?} did not round-trip", format);
        }
    }

    #[test]
    fn test_mutators_chain() {
        let mut color = Color::new();
        color.from_hsv(0.5, 0.5, 0.5).from_rgb(1.0, 0.0, 0.0);
        assert_eq!(color.to_css(Format::Rgb), "rgb(255, 0, 0)");
    }

    #[test]
    fn test_hsl_round_trip_through_store() {
        let mut color = Color::new();
        color.from_hsla(0.6, 0.5, 0.3, 1.0);
        let hsla = color.to_hsl();
        assert!((hsla.h - 0.6).abs() <= 1e-9);
        assert!((hsla.s - 0.5).abs() <= 1e-9);
        assert!((hsla.l - 0.3).abs() <= 1e-9);
    }

    #[test]
    fn test_listener_lifecycle_on_color() {
        let mut color = Color::new();
        let fired = change_counter(&mut color);
        let extra = fired.clone();
        let id = color.on("change", move || extra.set(extra.get() + 10));

        color.from_hsv(0.1, 0.1, 0.1);
        assert_eq!(fired.get(), 11);

        color.off("change", id);
        color.from_hsv(0.2, 0.2, 0.2);
        assert_eq!(fired.get(), 12);

        color.off_all("change");
        color.from_hsv(0.3, 0.3, 0.3);
        assert_eq!(fired.get(), 12);
    }
}
