//! The glyph set of a bitmap font.

use std::collections::HashMap;
use std::fmt;

use ahash::RandomState;
use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::glyph::Glyph;
use crate::rune;

/// Maps runes to their [`Glyph`] metrics.
///
/// Lookups go through an AHash map. Iteration and serialization walk the
/// runes in ascending order so saved documents are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Charset {
    glyphs: HashMap<char, Glyph, RandomState>,
}

impl Charset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            glyphs: HashMap::with_capacity_and_hasher(capacity, RandomState::new()),
        }
    }

    pub fn get(&self, rune: char) -> Option<&Glyph> {
        self.glyphs.get(&rune)
    }

    pub fn get_mut(&mut self, rune: char) -> Option<&mut Glyph> {
        self.glyphs.get_mut(&rune)
    }

    /// Insert or replace the glyph for `rune`, returning the previous one.
    pub fn insert(&mut self, rune: char, glyph: Glyph) -> Option<Glyph> {
        self.glyphs.insert(rune, glyph)
    }

    pub fn remove(&mut self, rune: char) -> Option<Glyph> {
        self.glyphs.remove(&rune)
    }

    pub fn contains(&self, rune: char) -> bool {
        self.glyphs.contains_key(&rune)
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Runes with a glyph, in ascending order.
    pub fn runes(&self) -> Vec<char> {
        let mut runes: Vec<char> = self.glyphs.keys().copied().collect();
        runes.sort_unstable();
        runes
    }

    /// Glyphs in ascending rune order.
    pub fn iter(&self) -> impl Iterator<Item = (char, &Glyph)> + '_ {
        self.runes().into_iter().map(move |rune| (rune, &self.glyphs[&rune]))
    }
}

impl FromIterator<(char, Glyph)> for Charset {
    fn from_iter<I: IntoIterator<Item = (char, Glyph)>>(iter: I) -> Self {
        let mut charset = Charset::new();
        charset.extend(iter);
        charset
    }
}

impl Extend<(char, Glyph)> for Charset {
    fn extend<I: IntoIterator<Item = (char, Glyph)>>(&mut self, iter: I) {
        self.glyphs.extend(iter);
    }
}

impl Serialize for Charset {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.glyphs.len()))?;
        for (rune, glyph) in self.iter() {
            map.serialize_entry(&rune::to_key(rune), glyph)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Charset {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(CharsetVisitor)
    }
}

struct CharsetVisitor;

impl<'de> Visitor<'de> for CharsetVisitor {
    type Value = Charset;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map from decimal code points to glyphs")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut charset = Charset::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((key, glyph)) = access.next_entry::<String, Glyph>()? {
            // Later duplicates replace earlier ones.
            charset.insert(rune::from_key::<A::Error>(&key)?, glyph);
        }
        Ok(charset)
    }
}
