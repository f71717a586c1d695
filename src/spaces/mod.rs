//! This module contains the plain view records for each supported color space. For convenience,
//! each record is imported into this module's namespace directly. The records are exactly what
//! the accessors on [`Color`](../color/struct.Color.html) hand out: dumb data in 0-1 space,
//! derived on demand from the canonical HSV value and never stored. Converting between them goes
//! through the pure engine in [`convert`](../convert/index.html) via `From` impls.

pub mod hsla;
pub mod hsva;
pub mod rgba;

// for convenience, use this namespace for the view records
pub use self::hsla::Hsla;
pub use self::hsva::Hsva;
pub use self::rgba::Rgba;
