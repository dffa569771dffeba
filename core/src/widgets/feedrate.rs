//! Feed-rate override readout.

use heapless::String;

use crate::colors;
use crate::display::{DisplayDriver, Font};
use crate::numfmt;

/// Draw the `>>` indicator and the override percentage at `(x, y)`.
pub fn draw_feedrate_status<D>(display: &mut D, (x, y): (u16, u16), feedrate_percent: i16)
where
    D: DisplayDriver,
{
    display.draw_string(
        true,
        Font::F14x28,
        colors::ICON_BLUE,
        colors::BG_BLACK,
        x,
        y,
        ">>",
    );

    let mut text: String<4> = String::new();
    let _ = text.push_str(&numfmt::int3(feedrate_percent));
    let _ = text.push('%');
    display.draw_string(
        true,
        Font::F14x28,
        colors::WHITE,
        colors::BG_BLACK,
        x + 2 * Font::F14x28.width(),
        y,
        &text,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::recording::RecordingDriver;

    #[test]
    fn test_indicator_then_value() {
        let mut d = RecordingDriver::new();
        draw_feedrate_status(&mut d, (5, 250), 100);

        assert_eq!(d.text_at(5, 250), Some(">>"));
        assert_eq!(d.text_at(5 + 28, 250), Some("100%"));
    }

    #[test]
    fn test_value_right_justified() {
        let mut d = RecordingDriver::new();
        draw_feedrate_status(&mut d, (292, 60), 80);
        assert_eq!(d.text_at(292 + 28, 60), Some(" 80%"));
    }
}
