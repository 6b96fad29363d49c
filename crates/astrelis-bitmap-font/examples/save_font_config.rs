//! Font Config Example
//!
//! Builds the metadata for a tiny 5x7 digit font by hand, prints the JSON
//! document that would ship next to its sprite sheet, then loads it back.
//!
//! ## Usage
//! ```bash
//! cargo run -p astrelis-bitmap-font --example save_font_config
//! ```

use std::io::Write;

use astrelis_bitmap_font::{Direction, FontConfig, FontConfigResult, Glyph, logging};

fn main() -> FontConfigResult<()> {
    logging::init();

    // Digits sit in a single row, 5px wide with 1px of spacing.
    let mut config = FontConfig::new(Direction::LeftToRight, '0', '9');
    for (i, rune) in ('0'..='9').enumerate() {
        let x = i as i32 * 5;
        config.glyphs.insert(rune, Glyph::new(x, 0, 5, 7, 6));
    }
    // The one is narrower than the rest.
    if let Some(one) = config.glyphs.get_mut('1') {
        one.width = 3;
        one.advance = 4;
    }

    let mut document = Vec::new();
    config.save(&mut document)?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(&document)?;
    writeln!(stdout)?;
    stdout.flush()?;

    let loaded = FontConfig::load(document.as_slice())?;
    tracing::info!(
        "Round trip ok: {} glyphs, {} missing",
        loaded.glyphs.len(),
        loaded.missing_runes().count()
    );

    Ok(())
}
