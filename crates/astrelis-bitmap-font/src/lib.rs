//! Astrelis Bitmap Font - sprite sheet font metadata
//!
//! A bitmap font is an image holding every glyph plus a small JSON document
//! describing it. This crate owns that document:
//! - [`Glyph`]: where a glyph sits on the sprite sheet and how far it advances
//! - [`Direction`]: the orientation strings are rendered in
//! - [`Charset`]: the rune to glyph mapping
//! - [`FontConfig`]: the persisted aggregate, with [`FontConfig::load`] and
//!   [`FontConfig::save`]
//!
//! Decoding the sheet image, opening files and laying out text are left to
//! the caller.
//!
//! ## Document format
//!
//! ```json
//! {
//!   "direction": 0,
//!   "rune_low": 65,
//!   "rune_high": 65,
//!   "glyphs": {
//!     "65": { "x": 0, "y": 0, "width": 10, "height": 12, "advance": 11 }
//!   }
//! }
//! ```
//!
//! `direction` is the [`Direction`] ordinal and glyph keys are decimal code
//! points.

pub mod charset;
pub mod direction;
pub mod error;
pub mod font_config;
pub mod glyph;
pub mod logging;
pub mod options;

mod rune;

pub use charset::Charset;
pub use direction::{Direction, InvalidDirection};
pub use error::{FontConfigError, FontConfigResult};
pub use font_config::FontConfig;
pub use glyph::Glyph;
pub use options::{DocumentFormat, SaveOptions};
