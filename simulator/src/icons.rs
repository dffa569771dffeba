//! Vector stand-ins for the display's icon library.
//!
//! The real display ships its icon artwork in flash; the simulator draws
//! rough equivalents from rectangles so the layout, animation and on/off
//! states can be judged by eye. Each icon clears its own cell first, the
//! way a bitmap blit would.

use dwinui_core::colors::{BG_BLACK, ICON_BLUE, SELECT, WHITE};
use dwinui_core::icons;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics_simulator::SimulatorDisplay;

const HEAT_RED: Rgb565 = Rgb565::new(31, 16, 4);

/// Heater/fan icon cell, matching the column spacing of the status screen.
const CELL_W: u32 = 40;
const CELL_H: u32 = 38;

/// Logo plate size; the layout centers on this width.
const LOGO_W: u32 = icons::LOGO_WIDTH as u32;
const LOGO_H: u32 = 30;

fn rect(display: &mut SimulatorDisplay<Rgb565>, x: i32, y: i32, w: u32, h: u32, color: Rgb565) {
    Rectangle::new(Point::new(x, y), Size::new(w, h))
        .into_styled(PrimitiveStyle::with_fill(color))
        .draw(display)
        .ok();
}

/// Draw the stand-in for `icon` with its top-left at `(x, y)`.
pub fn draw(display: &mut SimulatorDisplay<Rgb565>, icon: u8, x: i32, y: i32) {
    match icon {
        icons::LOGO => draw_logo(display, x, y),
        icons::HOTEND_OFF => draw_hotend(display, x, y, false),
        icons::HOTEND_ON => draw_hotend(display, x, y, true),
        icons::BED_OFF => draw_bed(display, x, y, false),
        icons::BED_ON => draw_bed(display, x, y, true),
        icons::FAN_0..=icons::FAN_3 => draw_fan(display, x, y, icon - icons::FAN_0),
        _ => {}
    }
}

fn draw_logo(display: &mut SimulatorDisplay<Rgb565>, x: i32, y: i32) {
    rect(display, x, y, LOGO_W, LOGO_H, BG_BLACK);
    rect(display, x, y, LOGO_W, 4, SELECT);
    rect(display, x, y + LOGO_H as i32 - 4, LOGO_W, 4, SELECT);
    // blocky wordmark placeholder
    let mut gx = x + 10;
    for w in [18u32, 12, 22, 12, 18, 16] {
        rect(display, gx, y + 9, w, 12, ICON_BLUE);
        gx += w as i32 + 6;
    }
}

fn draw_hotend(display: &mut SimulatorDisplay<Rgb565>, x: i32, y: i32, heating: bool) {
    rect(display, x, y, CELL_W, CELL_H, BG_BLACK);
    let body = if heating { HEAT_RED } else { ICON_BLUE };
    // heat block, taper, nozzle tip
    rect(display, x + 6, y + 4, 28, 14, body);
    rect(display, x + 12, y + 18, 16, 8, body);
    rect(display, x + 17, y + 26, 6, 8, WHITE);
    if heating {
        // drip of molten filament
        rect(display, x + 19, y + 34, 2, 4, HEAT_RED);
    }
}

fn draw_bed(display: &mut SimulatorDisplay<Rgb565>, x: i32, y: i32, heating: bool) {
    rect(display, x, y, CELL_W, CELL_H, BG_BLACK);
    let plate = if heating { HEAT_RED } else { ICON_BLUE };
    rect(display, x + 2, y + 26, 36, 6, plate);
    rect(display, x + 6, y + 32, 28, 2, WHITE);
    if heating {
        // rising heat wisps
        for (i, wx) in [8i32, 18, 28].into_iter().enumerate() {
            rect(display, x + wx, y + 6 + (i as i32 % 2) * 4, 3, 14, HEAT_RED);
        }
    }
}

fn draw_fan(display: &mut SimulatorDisplay<Rgb565>, x: i32, y: i32, frame: u8) {
    rect(display, x, y, CELL_W, CELL_H, BG_BLACK);
    // hub
    rect(display, x + 17, y + 16, 6, 6, WHITE);
    // two opposed blades per frame, stepping a quarter turn across the
    // four frames (0/2 and 1/3 mirror, which reads as rotation)
    match frame % 4 {
        0 => {
            rect(display, x + 17, y + 2, 6, 12, ICON_BLUE);
            rect(display, x + 17, y + 24, 6, 12, ICON_BLUE);
        }
        1 => {
            rect(display, x + 26, y + 6, 10, 8, ICON_BLUE);
            rect(display, x + 4, y + 24, 10, 8, ICON_BLUE);
        }
        2 => {
            rect(display, x + 26, y + 16, 12, 6, ICON_BLUE);
            rect(display, x + 2, y + 16, 12, 6, ICON_BLUE);
        }
        _ => {
            rect(display, x + 26, y + 24, 10, 8, ICON_BLUE);
            rect(display, x + 4, y + 6, 10, 8, ICON_BLUE);
        }
    }
}
