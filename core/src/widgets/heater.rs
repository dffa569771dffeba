//! Heater column: target temperature over the heater icon over the
//! current temperature.

use heapless::String;

use crate::colors;
use crate::display::{DisplayDriver, Font};
use crate::icons;
use crate::layout::HeaterSlot;
use crate::snapshot::{HeaterId, HeaterSnapshot};

/// Round half up to an integer and format as the 3-char field plus the
/// degree glyph. The cast truncates toward zero, so `-0.5 + 0.5` lands on 0.
fn temp_text(value: f32) -> String<8> {
    let rounded = (value + 0.5) as i16;
    let mut s = String::new();
    let _ = s.push_str(&crate::numfmt::int3(rounded));
    let _ = s.push('°');
    s
}

/// Draw one heater column at its slot.
pub fn draw_heater_status<D>(display: &mut D, slot: &HeaterSlot, heater: &HeaterSnapshot)
where
    D: DisplayDriver,
{
    display.draw_string(
        true,
        Font::F14x28,
        colors::WHITE,
        colors::BG_BLACK,
        slot.x,
        slot.y,
        &temp_text(heater.target),
    );

    let base = match slot.id {
        HeaterId::Bed => icons::BED_OFF,
        HeaterId::Hotend(_) => icons::HOTEND_OFF,
    };
    display.draw_icon(icons::LIB, base + u8::from(heater.heating), slot.x, slot.y + 30);

    display.draw_string(
        true,
        Font::F14x28,
        colors::WHITE,
        colors::BG_BLACK,
        slot.x,
        slot.y + 70,
        &temp_text(heater.current),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::recording::RecordingDriver;

    fn slot(id: HeaterId) -> HeaterSlot {
        HeaterSlot { id, x: 15, y: 60 }
    }

    #[test]
    fn test_rounds_half_up() {
        assert_eq!(temp_text(49.5).as_str(), " 50°");
        assert_eq!(temp_text(49.4).as_str(), " 49°");
        assert_eq!(temp_text(0.0).as_str(), "  0°");
    }

    #[test]
    fn test_negative_half_rounds_up_to_zero() {
        // half-up, not half-away-from-zero
        assert_eq!(temp_text(-0.5).as_str(), "  0°");
        assert_eq!(temp_text(-0.6).as_str(), "  0°");
        assert_eq!(temp_text(-1.5).as_str(), "- 1°");
    }

    #[test]
    fn test_draws_target_icon_current_stack() {
        let mut d = RecordingDriver::new();
        let heater = HeaterSnapshot {
            current: 203.4,
            target: 210.0,
            heating: true,
        };
        draw_heater_status(&mut d, &slot(HeaterId::Hotend(0)), &heater);

        assert_eq!(d.text_at(15, 60), Some("210°"));
        assert_eq!(d.icons(), vec![(icons::HOTEND_ON, 15, 90)]);
        assert_eq!(d.text_at(15, 130), Some("203°"));
    }

    #[test]
    fn test_idle_bed_uses_off_icon() {
        let mut d = RecordingDriver::new();
        let heater = HeaterSnapshot {
            current: 22.7,
            target: 0.0,
            heating: false,
        };
        draw_heater_status(&mut d, &slot(HeaterId::Bed), &heater);

        assert_eq!(d.icons(), vec![(icons::BED_OFF, 15, 90)]);
        assert_eq!(d.text_at(15, 130), Some(" 23°"));
    }
}
