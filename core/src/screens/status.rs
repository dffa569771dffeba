//! The status screen orchestrator.
//!
//! One call draws one complete frame in a fixed order from a single
//! snapshot, so the screen can never mix data from two ticks. The call is
//! stateless; the only frame-to-frame variation comes from the snapshot and
//! the caller's blink flag.

use heapless::String;

use crate::colors;
use crate::display::{DisplayDriver, Font, RectMode};
use crate::icons;
use crate::layout::StatusLayout;
use crate::snapshot::{AXES, PrinterSnapshot};
use crate::widgets::{
    draw_axis_value,
    draw_fan_status,
    draw_feedrate_status,
    draw_heater_status,
    draw_progress,
    draw_time,
};

/// Draw one full status frame.
///
/// Draw order: logo, heater columns, fan, axes frame, axis readouts,
/// feed-rate, time, progress bar, status message. Elements the layout left
/// out (missing bed, no fan, no remaining-time row) are simply skipped.
pub fn draw_status_screen<D>(
    display: &mut D,
    layout: &StatusLayout,
    snapshot: &PrinterSnapshot<'_>,
    blink: bool,
) where
    D: DisplayDriver,
{
    display.draw_icon(icons::LIB, icons::LOGO, layout.logo.0, layout.logo.1);

    for slot in &layout.heaters {
        if let Some(heater) = snapshot.heater(slot.id) {
            draw_heater_status(display, slot, heater);
        }
    }

    if let Some(fan) = layout.fan {
        draw_fan_status(display, fan, snapshot.fan_speed_percent);
    }

    let (fx0, fy0, fx1, fy1) = layout.axes_frame;
    display.draw_rect(RectMode::Outline, colors::SELECT, fx0, fy0, fx1, fy1);

    for (slot, axis) in layout.axes.iter().zip(AXES) {
        let value = slot.format.format(snapshot.axis(axis).position);
        draw_axis_value(
            display,
            slot,
            axis,
            &value,
            snapshot.axis(axis),
            layout.warn_reduced_accuracy,
            blink,
        );
    }

    draw_feedrate_status(display, layout.feedrate, snapshot.feedrate_percent);
    draw_time(display, &layout.time, layout.width, snapshot, blink);
    draw_progress(display, &layout.progress, snapshot.progress);
    draw_status_message(display, layout, snapshot.status_message);
}

/// Draw the one-line status message row.
///
/// The text is truncated to the row's glyph capacity and padded to it with
/// spaces, so a shorter message overwrites every cell the previous one used
/// without a clearing rectangle.
pub fn draw_status_message<D>(display: &mut D, layout: &StatusLayout, text: &str)
where
    D: DisplayDriver,
{
    let capacity = (layout.width / Font::F14x28.width()) as usize;
    let mut row: String<136> = String::new();
    for c in text.chars().take(capacity) {
        let _ = row.push(c);
    }
    let used = row.chars().count();
    for _ in used..capacity {
        let _ = row.push(' ');
    }

    display.draw_string(
        true,
        Font::F14x28,
        colors::WHITE,
        colors::BG_BLACK,
        0,
        layout.status_row_y,
        &row,
    );
}
