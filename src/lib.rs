//! Vermilion is a library for holding a single color value and doing everything a UI needs done
//! with it: converting losslessly between HSV, HSL, RGB, and hex, reading colors from the usual
//! textual notations, writing them back out, and telling observers when the value actually
//! changed. The underlying philosophy is that a color a user is editing is one value with many
//! faces, not many values to keep in sync: the canonical form is HSV plus alpha, every other
//! representation is derived on read, and mutation through any face notifies listeners if and
//! only if the stored value really moved. Numeric garbage is clamped, textual garbage falls
//! back or fails loudly at the very end, and nothing in between aborts.

#![doc(html_root_url = "https://docs.rs/vermilion/1.0.0")]
#![deny(missing_docs)]

extern crate num;
extern crate regex;
extern crate serde;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate serde_derive;

#[cfg(test)]
#[macro_use]
extern crate float_cmp;

pub mod channel;
pub mod color;
pub mod convert;
pub mod event;
pub mod format;
mod parse;
pub mod prelude;
pub mod spaces;

pub use color::{Color, NamedColorResolver};
pub use parse::ColorParseError;
