//! Axis position readout with the homed/trusted blink protocol.
//!
//! An axis value is only literal text when the position can be believed.
//! Before homing the readout flickers `123 ↔ ???`; homed but no longer
//! trusted (stall, motors released) it flickers `123 ↔ blank`; homed and
//! trusted it is steady. The flicker comes from the caller's blink flag,
//! so two frames with opposite flags render the two halves.

use heapless::String;

use crate::colors;
use crate::display::{DisplayDriver, Font};
use crate::layout::AxisSlot;
use crate::snapshot::{Axis, AxisSnapshot};

/// Select the text for one axis value field.
///
/// `value` is the pre-formatted fixed-width readout, `blanks` the all-space
/// string of the same width. On the blink half-cycle the literal value is
/// always shown; otherwise an unhomed axis gets the character-wise mask
/// (sign, point and space columns survive, digits become `?`, length never
/// changes) and an untrusted one gets the blanks.
pub fn axis_value_text(
    value: &str,
    homed: bool,
    trusted: bool,
    warn_reduced_accuracy: bool,
    blanks: &'static str,
    blink: bool,
) -> String<8> {
    let mut out = String::new();
    if blink || (homed && (trusted || !warn_reduced_accuracy)) {
        let _ = out.push_str(value);
    } else if !homed {
        for c in value.chars() {
            let _ = out.push(if c <= '.' { c } else { '?' });
        }
    } else {
        let _ = out.push_str(blanks);
    }
    out
}

/// Draw one axis readout: label glyph centered over the value field, then
/// the value text selected by [`axis_value_text`].
pub fn draw_axis_value<D>(
    display: &mut D,
    slot: &AxisSlot,
    axis: Axis,
    value: &str,
    state: &AxisSnapshot,
    warn_reduced_accuracy: bool,
    blink: bool,
) where
    D: DisplayDriver,
{
    let value_width = Font::F14x28.width();
    let glyphs = value.chars().count() as u16;

    let mut label: String<4> = String::new();
    let _ = label.push(axis.label());
    display.draw_string(
        true,
        Font::F16x32,
        colors::ICON_BLUE,
        colors::BG_BLACK,
        slot.x + (glyphs * value_width / 2) - value_width / 2,
        slot.y + 2,
        &label,
    );

    let text = axis_value_text(
        value,
        state.homed,
        state.trusted,
        warn_reduced_accuracy,
        slot.format.blanks(),
        blink,
    );
    display.draw_string(
        true,
        Font::F14x28,
        colors::WHITE,
        colors::BG_BLACK,
        slot.x,
        slot.y + 32,
        &text,
    );
}
