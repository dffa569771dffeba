//! Part-cooling fan column: animated fan icon plus duty percentage.

use heapless::String;

use crate::colors;
use crate::display::{DisplayDriver, Font};
use crate::icons;
use crate::numfmt;

/// Frame interval of the hardware icon animation in milliseconds.
const FRAME_INTERVAL_MS: u8 = 25;

/// Draw the fan column at `(x, y)`.
///
/// A stopped fan shows the first animation frame as a static icon and blanks
/// the percentage field so the column keeps its footprint; a spinning one
/// hands the display an animation over all four frames and shows the duty.
pub fn draw_fan_status<D>(display: &mut D, (x, y): (u16, u16), speed_percent: u8)
where
    D: DisplayDriver,
{
    let animate = speed_percent > 0;

    let mut text: String<4> = String::new();
    if animate {
        let _ = text.push_str(&numfmt::uint3(speed_percent));
        let _ = text.push('%');
    } else {
        let _ = text.push_str("    ");
    }

    display.animate_icon(
        icons::LIB,
        animate,
        icons::FAN_0,
        icons::FAN_3,
        x + 15,
        y + 28,
        FRAME_INTERVAL_MS,
    );
    if !animate {
        // The animation command only freezes the current frame; pin the
        // stopped fan to a known pose.
        display.draw_icon(icons::LIB, icons::FAN_0, x + 15, y + 28);
    }

    display.draw_string(
        true,
        Font::F14x28,
        colors::WHITE,
        colors::BG_BLACK,
        x,
        y + 70,
        &text,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::recording::{Op, RecordingDriver};

    #[test]
    fn test_spinning_fan_animates_and_shows_duty() {
        let mut d = RecordingDriver::new();
        draw_fan_status(&mut d, (175, 60), 75);

        assert!(d.ops.iter().any(|op| matches!(
            op,
            Op::Anim {
                animate: true,
                first: icons::FAN_0,
                last: icons::FAN_3,
                x: 190,
                y: 88,
                interval_ms: FRAME_INTERVAL_MS,
                ..
            }
        )));
        assert!(d.icons().is_empty(), "no static icon while animating");
        assert_eq!(d.text_at(175, 130), Some(" 75%"));
    }

    #[test]
    fn test_stopped_fan_is_static_with_blank_field() {
        let mut d = RecordingDriver::new();
        draw_fan_status(&mut d, (175, 60), 0);

        assert!(d.ops.iter().any(|op| matches!(
            op,
            Op::Anim {
                animate: false,
                ..
            }
        )));
        assert_eq!(d.icons(), vec![(icons::FAN_0, 190, 88)]);
        assert_eq!(d.text_at(175, 130), Some("    "));
    }

    #[test]
    fn test_full_duty() {
        let mut d = RecordingDriver::new();
        draw_fan_status(&mut d, (175, 60), 100);
        assert_eq!(d.text_at(175, 130), Some("100%"));
    }
}
