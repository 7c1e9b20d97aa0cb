//! Mapping of samples to escape-coded glyphs.
//!
//! Each cell is printed as a truecolor background escape, a truecolor
//! foreground escape and one glyph whose visual density follows the sample's
//! brightness.

use crate::rendering::sample::Sample;
use crossterm::style::{Color, Colored, SetBackgroundColor, SetForegroundColor};
use std::sync::Once;

/// Brightness bands, densest first. A band matches when the brightness is
/// strictly greater than its threshold; the first match wins.
pub const GLYPH_BANDS: [(u8, char); 10] = [
    (230, '#'),
    (207, '&'),
    (184, '$'),
    (161, 'X'),
    (138, 'x'),
    (115, '='),
    (92, '+'),
    (69, ';'),
    (46, ':'),
    (23, '.'),
];

/// Glyph used when no band matches.
pub const EMPTY_GLYPH: char = ' ';

/// Picks the glyph for a brightness value.
///
/// ```rust
/// use blockart::rendering::glyph::glyph_for;
///
/// assert_eq!(glyph_for(255), '#');
/// assert_eq!(glyph_for(230), '&');
/// assert_eq!(glyph_for(0), ' ');
/// ```
pub fn glyph_for(brightness: u8) -> char {
    GLYPH_BANDS
        .iter()
        .find(|(threshold, _)| brightness > *threshold)
        .map_or(EMPTY_GLYPH, |(_, glyph)| *glyph)
}

fn rgb([r, g, b]: [u8; 3]) -> Color {
    Color::Rgb { r, g, b }
}

/// Makes crossterm emit colour escapes even when `NO_COLOR` is set.
///
/// Output is always 24-bit truecolor; there is no colourless format.
pub fn force_truecolor() {
    static FORCE: Once = Once::new();
    FORCE.call_once(|| Colored::set_ansi_color_disabled(false));
}

/// Renders one cell: background escape, foreground escape, glyph.
pub fn render_cell(sample: Sample, background: [u8; 3]) -> String {
    force_truecolor();
    format!(
        "{}{}{}",
        SetBackgroundColor(rgb(background)),
        SetForegroundColor(rgb(sample.rgb())),
        glyph_for(sample.brightness())
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn density(glyph: char) -> usize {
        // number of bands above the glyph's band, so denser glyphs rank lower
        GLYPH_BANDS
            .iter()
            .position(|(_, g)| *g == glyph)
            .unwrap_or(GLYPH_BANDS.len())
    }

    #[test]
    fn test_band_boundaries() {
        assert_eq!(glyph_for(231), '#');
        assert_eq!(glyph_for(230), '&');
        assert_eq!(glyph_for(208), '&');
        assert_eq!(glyph_for(207), '$');
        assert_eq!(glyph_for(162), 'X');
        assert_eq!(glyph_for(139), 'x');
        assert_eq!(glyph_for(116), '=');
        assert_eq!(glyph_for(93), '+');
        assert_eq!(glyph_for(70), ';');
        assert_eq!(glyph_for(47), ':');
        assert_eq!(glyph_for(24), '.');
        assert_eq!(glyph_for(23), ' ');
        assert_eq!(glyph_for(0), ' ');
    }

    #[test]
    fn test_render_cell_escapes() {
        let cell = render_cell(Sample::new(255, [255, 0, 0]), [0, 0, 0]);
        assert_eq!(cell, "\x1b[48;2;0;0;0m\x1b[38;2;255;0;0m#");

        let cell = render_cell(Sample::new(10, [1, 2, 3]), [40, 50, 60]);
        assert_eq!(cell, "\x1b[48;2;40;50;60m\x1b[38;2;1;2;3m ");
    }

    #[test]
    fn test_render_cell_ignores_no_color() {
        // SAFETY: no test reads NO_COLOR other than through crossterm
        unsafe { std::env::set_var("NO_COLOR", "1") };
        let cell = render_cell(Sample::new(255, [255, 0, 0]), [0, 0, 0]);
        assert_eq!(cell, "\x1b[48;2;0;0;0m\x1b[38;2;255;0;0m#");
    }

    proptest! {
        #[test]
        fn glyph_density_never_increases_when_darker(a in any::<u8>(), b in any::<u8>()) {
            let (low, high) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(density(glyph_for(low)) >= density(glyph_for(high)));
        }

        #[test]
        fn every_brightness_maps_to_a_known_glyph(brightness in any::<u8>()) {
            let glyph = glyph_for(brightness);
            prop_assert!(glyph == EMPTY_GLYPH || GLYPH_BANDS.iter().any(|(_, g)| *g == glyph));
        }
    }
}
