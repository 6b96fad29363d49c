use std::fmt;

use serde::de::{Deserialize, Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::Serialize;

/// Metrics for a single glyph of a bitmap font.
///
/// Describes which area of the sprite sheet holds the glyph's pixels and how
/// far the pen moves before the next glyph. Nothing is validated; negative
/// sizes are representable but meaningless.
///
/// Decodes only from a JSON object. Missing or `null` fields stay zero,
/// unknown fields are skipped and a repeated field keeps its last value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Glyph {
    /// X location of the glyph on the sprite sheet.
    pub x: i32,
    /// Y location of the glyph on the sprite sheet.
    pub y: i32,
    /// Width of the glyph on the sprite sheet.
    pub width: i32,
    /// Height of the glyph on the sprite sheet.
    pub height: i32,
    /// Distance to the next glyph, used to lay out non-monospaced fonts.
    pub advance: i32,
}

impl Glyph {
    pub fn new(x: i32, y: i32, width: i32, height: i32, advance: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            advance,
        }
    }

    /// A glyph with no pixels on the sheet, such as a space.
    pub fn is_blank(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}

impl<'de> Deserialize<'de> for Glyph {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(GlyphVisitor)
    }
}

struct GlyphVisitor;

impl<'de> Visitor<'de> for GlyphVisitor {
    type Value = Glyph;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a glyph object")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut glyph = Glyph::default();
        while let Some(key) = access.next_key::<String>()? {
            let field = match key.as_str() {
                "x" => &mut glyph.x,
                "y" => &mut glyph.y,
                "width" => &mut glyph.width,
                "height" => &mut glyph.height,
                "advance" => &mut glyph.advance,
                _ => {
                    access.next_value::<IgnoredAny>()?;
                    continue;
                }
            };
            if let Some(value) = access.next_value::<Option<i32>>()? {
                *field = value;
            }
        }
        Ok(glyph)
    }
}
