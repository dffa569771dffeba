//! Elapsed/remaining time fields and the print progress bar.

use heapless::String;

use crate::colors;
use crate::config::ProgressUnit;
use crate::display::{DisplayDriver, Font, RectMode};
use crate::layout::{ProgressLayout, TimeLayout};
use crate::numfmt;
use crate::snapshot::PrinterSnapshot;

/// Draw the time field(s) for the resolved layout.
///
/// Portrait shares one right-aligned field between elapsed and remaining;
/// landscape pins each to its own row. Remaining values are prefixed `R`,
/// elapsed with a blank so both prefixes overwrite each other cleanly.
pub fn draw_time<D>(
    display: &mut D,
    time: &TimeLayout,
    width: u16,
    snapshot: &PrinterSnapshot<'_>,
    blink: bool,
) where
    D: DisplayDriver,
{
    match *time {
        TimeLayout::Rotating {
            y,
            show_remaining,
            rotate,
        } => {
            let remaining_turn =
                show_remaining && snapshot.job_running && (!rotate || blink);
            let text = if remaining_turn {
                time_text('R', snapshot.remaining_secs.unwrap_or(0))
            } else {
                time_text(' ', snapshot.elapsed_secs)
            };
            let glyphs = text.chars().count() as u16;
            let x = width - (glyphs + 1) * Font::F14x28.width();
            draw_time_text(display, x, y, &text);
        }
        TimeLayout::Fixed { elapsed, remaining } => {
            let text = time_text(' ', snapshot.elapsed_secs);
            draw_time_text(display, elapsed.0, elapsed.1, &text);
            if let Some((x, y)) = remaining {
                let text = time_text('R', snapshot.remaining_secs.unwrap_or(0));
                draw_time_text(display, x, y, &text);
            }
        }
    }
}

fn time_text(prefix: char, seconds: u32) -> String<9> {
    let mut s = String::new();
    let _ = s.push(prefix);
    let _ = s.push_str(&numfmt::digital(seconds));
    s
}

fn draw_time_text<D: DisplayDriver>(display: &mut D, x: u16, y: u16, text: &str) {
    display.draw_string(
        true,
        Font::F14x28,
        colors::WHITE,
        colors::BG_BLACK,
        x,
        y,
        text,
    );
}

/// Bar fill width in pixels for a raw progress value.
///
/// The raw value is first quantized to whole percent (integer division by
/// the unit scale) and then scaled to the interior, so a permyriad build
/// advances the bar in 1% steps while its text shows tenths.
pub fn fill_width(interior: u16, progress: u16, unit: ProgressUnit) -> u16 {
    let percent = u32::from(progress / unit.scale()).min(100);
    (u32::from(interior) * percent / 100) as u16
}

/// Draw the progress bar and its centered percentage text.
///
/// Three rectangles make the bar stateless: a background fill clears the
/// previous frame, the outline restores the frame, the fill paints the
/// current level. No differential redraw state survives the call.
pub fn draw_progress<D>(display: &mut D, progress: &ProgressLayout, raw: u16)
where
    D: DisplayDriver,
{
    display.draw_rect(
        RectMode::Filled,
        colors::BG_BLACK,
        progress.x0,
        progress.y0,
        progress.x1,
        progress.y1,
    );
    display.draw_rect(
        RectMode::Outline,
        colors::SELECT,
        progress.x0,
        progress.y0,
        progress.x1,
        progress.y1,
    );

    let fill = fill_width(progress.interior(), raw, progress.unit);
    if fill > 0 {
        display.draw_rect(
            RectMode::Filled,
            colors::SELECT,
            progress.x0 + 1,
            progress.y0 + 1,
            progress.x0 + fill,
            progress.y1 - 1,
        );
    }

    let mut text: String<5> = String::new();
    if progress.decimals {
        let _ = text.push_str(&numfmt::permyriad4(raw));
    } else {
        let percent = (raw / progress.unit.scale()).min(100);
        let _ = text.push_str(&numfmt::int3(percent as i16));
    }
    let _ = text.push('%');

    let glyphs = text.chars().count() as u16;
    let font = Font::F16x32;
    let x = progress.x0 + 1 + progress.interior() / 2 - glyphs * font.width() / 2;
    // The one transparent string on the screen; the bar underneath is its
    // background.
    display.draw_string(
        false,
        font,
        colors::PERCENT,
        colors::BG_BLACK,
        x,
        progress.text_y,
        &text,
    );
}
