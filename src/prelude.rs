//! This module simply brings the most common Vermilion functionality under a single namespace,
//! to prevent excessive imports: the ubiquitous [`Color`], its parse error [`ColorParseError`],
//! the [`Format`] names, the resolver type for wiring in a host's named-color lookup, and the
//! three view records. The listener handle and the raw conversion functions are not included;
//! reach into [`event`](../event/index.html) and [`convert`](../convert/index.html) for those.

pub use color::{Color, NamedColorResolver};
pub use format::Format;
pub use parse::ColorParseError;
pub use spaces::{Hsla, Hsva, Rgba};
