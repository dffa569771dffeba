//! RGB565 palette used by the status screen.
//!
//! These are the stock UI colors of the DWIN display firmware, expressed as
//! `embedded-graphics` colors so the simulator and any RGB565 panel agree
//! with the values the real display uses.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

/// Pure white, used for all value text (0xFFFF).
pub const WHITE: Rgb565 = Rgb565::WHITE;

/// Near-black screen background (0x0841).
/// Not pure black; the panel renders pure black slightly purple.
pub const BG_BLACK: Rgb565 = Rgb565::new(1, 2, 1);

/// Lighter blue matching the icon artwork, used for labels (0x45FA).
pub const ICON_BLUE: Rgb565 = Rgb565::new(8, 47, 26);

/// Teal frame and progress bar fill color (0x33BB).
pub const SELECT: Rgb565 = Rgb565::new(6, 29, 27);

/// Yellow-green percentage text drawn over the progress bar (0xFE29).
pub const PERCENT: Rgb565 = Rgb565::new(31, 49, 9);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_matches_display_firmware_values() {
        assert_eq!(WHITE.into_storage(), 0xFFFF);
        assert_eq!(BG_BLACK.into_storage(), 0x0841);
        assert_eq!(ICON_BLUE.into_storage(), 0x45FA);
        assert_eq!(SELECT.into_storage(), 0x33BB);
        assert_eq!(PERCENT.into_storage(), 0xFE29);
    }
}
