//! Pure data for swipe action presentation
//!
//! Colors, font tokens and geometry primitives. Nothing in here knows about
//! gestures; the foundation crate maps gesture state onto these types and a
//! renderer turns them into pixels.

mod color;
mod geometry;
mod typography;

pub use color::*;
pub use geometry::*;
pub use typography::*;

pub mod prelude {
    pub use crate::color::Color;
    pub use crate::geometry::{Point, Rect, Size};
    pub use crate::typography::{ActionFont, FontWeight};
}
