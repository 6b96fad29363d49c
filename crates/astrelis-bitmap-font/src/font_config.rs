//! Bitmap font metadata and its JSON document form.
//!
//! A [`FontConfig`] ships next to the sprite sheet image of a bitmap font and
//! tells a renderer where each glyph lives on the sheet, how far to advance
//! after drawing it, and in which direction strings flow.
//!
//! # Example
//!
//! ```
//! use astrelis_bitmap_font::{Direction, FontConfig, Glyph};
//!
//! let mut config = FontConfig::new(Direction::LeftToRight, 'A', 'Z');
//! config.glyphs.insert('A', Glyph::new(0, 0, 10, 12, 11));
//!
//! let mut document = Vec::new();
//! config.save(&mut document).unwrap();
//!
//! let loaded = FontConfig::load(document.as_slice()).unwrap();
//! assert_eq!(loaded, config);
//! ```

use std::fmt;
use std::io::{Read, Write};
use std::str::FromStr;

use serde::Serialize;
use serde::de::{Deserialize, Deserializer, IgnoredAny, MapAccess, Visitor};
use serde_json::ser::PrettyFormatter;

use crate::charset::Charset;
use crate::direction::Direction;
use crate::error::{FontConfigError, FontConfigResult};
use crate::glyph::Glyph;
use crate::options::{DocumentFormat, SaveOptions};
use crate::rune;

/// Raster font metadata, loaded from or saved to a JSON document.
///
/// The document must be a JSON object. Missing or `null` fields decode to
/// their zero value, unknown fields are ignored and a repeated field keeps its
/// last value. `rune_low <= rune_high` is expected but not enforced, and the
/// glyph set may have gaps inside the range.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FontConfig {
    /// Orientation of rendered strings.
    pub direction: Direction,

    /// Lower rune boundary (inclusive).
    #[serde(serialize_with = "rune::serialize")]
    pub rune_low: char,

    /// Upper rune boundary (inclusive).
    #[serde(serialize_with = "rune::serialize")]
    pub rune_high: char,

    /// Location, size and advance of each glyph on the sprite sheet.
    pub glyphs: Charset,
}

impl FontConfig {
    /// Create a config covering `rune_low..=rune_high` with no glyphs yet.
    pub fn new(direction: Direction, rune_low: char, rune_high: char) -> Self {
        Self {
            direction,
            rune_low,
            rune_high,
            glyphs: Charset::new(),
        }
    }

    /// Read a config from a JSON encoded stream.
    ///
    /// The whole stream is buffered before parsing. Read failures surface as
    /// [`FontConfigError::IoError`], anything that is not a font config document
    /// (an empty stream included) as [`FontConfigError::MalformedDocument`].
    pub fn load<R: Read>(mut reader: R) -> FontConfigResult<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;

        let config = Self::from_slice(&data)?;
        tracing::debug!(
            "Loaded font config: {} bytes, {} glyphs, runes {:#x}..={:#x}",
            data.len(),
            config.glyphs.len(),
            u32::from(config.rune_low),
            u32::from(config.rune_high)
        );
        Ok(config)
    }

    /// Replace this config with one read from `reader`.
    ///
    /// On error `self` is left untouched.
    pub fn reload<R: Read>(&mut self, reader: R) -> FontConfigResult<()> {
        *self = Self::load(reader)?;
        Ok(())
    }

    /// Parse a config from an in-memory JSON document.
    pub fn from_slice(bytes: &[u8]) -> FontConfigResult<Self> {
        let config: FontConfig =
            serde_json::from_slice(bytes).map_err(FontConfigError::MalformedDocument)?;
        config.warn_on_range_mismatch();
        Ok(config)
    }

    /// Write this config to `writer` as indented JSON.
    ///
    /// The writer is neither flushed nor closed.
    pub fn save<W: Write>(&self, writer: W) -> FontConfigResult<()> {
        self.save_with(writer, &SaveOptions::default())
    }

    pub fn save_with<W: Write>(&self, mut writer: W, options: &SaveOptions) -> FontConfigResult<()> {
        let data = self.to_bytes(options)?;
        writer.write_all(&data)?;
        tracing::debug!(
            "Saved font config: {} bytes, {} glyphs",
            data.len(),
            self.glyphs.len()
        );
        Ok(())
    }

    /// Encode this config without writing it anywhere.
    pub fn to_bytes(&self, options: &SaveOptions) -> FontConfigResult<Vec<u8>> {
        let mut data = Vec::new();
        match options.format {
            DocumentFormat::Pretty => {
                let indent = vec![b' '; options.indent];
                let formatter = PrettyFormatter::with_indent(&indent);
                let mut serializer = serde_json::Serializer::with_formatter(&mut data, formatter);
                self.serialize(&mut serializer)
            }
            DocumentFormat::Compact => {
                let mut serializer = serde_json::Serializer::new(&mut data);
                self.serialize(&mut serializer)
            }
        }
        .map_err(FontConfigError::SerializationError)?;
        Ok(data)
    }

    pub fn glyph(&self, rune: char) -> Option<&Glyph> {
        self.glyphs.get(rune)
    }

    /// Whether `rune` lies inside the declared rune range.
    pub fn covers(&self, rune: char) -> bool {
        (self.rune_low..=self.rune_high).contains(&rune)
    }

    /// Runes inside the declared range that have no glyph.
    pub fn missing_runes(&self) -> impl Iterator<Item = char> + '_ {
        (self.rune_low..=self.rune_high).filter(move |rune| !self.glyphs.contains(*rune))
    }

    /// Runes that have a glyph but lie outside the declared range.
    pub fn stray_runes(&self) -> Vec<char> {
        self.glyphs
            .runes()
            .into_iter()
            .filter(|rune| !self.covers(*rune))
            .collect()
    }

    fn warn_on_range_mismatch(&self) {
        if self.rune_low > self.rune_high {
            tracing::warn!(
                "Font config rune range is inverted: low {:#x} > high {:#x}",
                u32::from(self.rune_low),
                u32::from(self.rune_high)
            );
            return;
        }

        let stray = self.stray_runes();
        if !stray.is_empty() {
            tracing::warn!(
                "Font config has {} glyphs outside its rune range {:#x}..={:#x}",
                stray.len(),
                u32::from(self.rune_low),
                u32::from(self.rune_high)
            );
        }
    }
}

impl<'de> Deserialize<'de> for FontConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(FontConfigVisitor)
    }
}

struct FontConfigVisitor;

impl<'de> Visitor<'de> for FontConfigVisitor {
    type Value = FontConfig;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a font config object")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut config = FontConfig::default();
        while let Some(key) = access.next_key::<String>()? {
            match key.as_str() {
                "direction" => {
                    if let Some(direction) = access.next_value::<Option<Direction>>()? {
                        config.direction = direction;
                    }
                }
                "rune_low" => {
                    if let Some(rune) = rune::next_value(&mut access)? {
                        config.rune_low = rune;
                    }
                }
                "rune_high" => {
                    if let Some(rune) = rune::next_value(&mut access)? {
                        config.rune_high = rune;
                    }
                }
                "glyphs" => {
                    if let Some(glyphs) = access.next_value::<Option<Charset>>()? {
                        config.glyphs = glyphs;
                    }
                }
                _ => {
                    access.next_value::<IgnoredAny>()?;
                }
            }
        }
        Ok(config)
    }
}

impl FromStr for FontConfig {
    type Err = FontConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_slice(s.as_bytes())
    }
}
