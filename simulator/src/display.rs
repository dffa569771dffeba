//! [`DisplayDriver`] implementation over the SDL2 simulator display.
//!
//! The real display rasterizes its own bitmap fonts and icon library; here
//! the fonts become profont sizes of similar proportions and the icons are
//! vector stand-ins. Text is laid out glyph-by-glyph into the DWIN font's
//! fixed cell grid so every column lines up exactly where the hardware
//! would put it, whatever the profont advance width is.

use std::time::Instant;

use dwinui_core::display::{DisplayDriver, Font, RectMode};
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, PrimitiveStyleBuilder, Rectangle, StrokeAlignment};
use embedded_graphics::text::{Baseline, Text};
use embedded_graphics_simulator::SimulatorDisplay;
use profont::{
    PROFONT_7_POINT,
    PROFONT_9_POINT,
    PROFONT_12_POINT,
    PROFONT_14_POINT,
    PROFONT_18_POINT,
    PROFONT_24_POINT,
};

use crate::icons;

/// Nearest profont size for a DWIN bitmap font.
const fn profont_for(font: Font) -> &'static MonoFont<'static> {
    match font {
        Font::F6x12 => &PROFONT_7_POINT,
        Font::F8x16 => &PROFONT_9_POINT,
        Font::F10x20 => &PROFONT_12_POINT,
        Font::F12x24 => &PROFONT_14_POINT,
        Font::F14x28 => &PROFONT_18_POINT,
        _ => &PROFONT_24_POINT,
    }
}

/// Simulated DWIN display: draws every command onto an in-memory RGB565
/// frame the SDL2 window presents.
pub struct DwinDisplay {
    display: SimulatorDisplay<Rgb565>,
    started: Instant,
}

impl DwinDisplay {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            display: SimulatorDisplay::new(Size::new(u32::from(width), u32::from(height))),
            started: Instant::now(),
        }
    }

    /// The frame for the SDL2 window to present.
    pub fn frame(&self) -> &SimulatorDisplay<Rgb565> {
        &self.display
    }

    pub fn clear(&mut self, color: Rgb565) {
        self.display.clear(color).ok();
    }
}

impl DisplayDriver for DwinDisplay {
    fn draw_string(
        &mut self,
        opaque: bool,
        font: Font,
        fg: Rgb565,
        bg: Rgb565,
        x: u16,
        y: u16,
        text: &str,
    ) {
        let cell = Size::new(u32::from(font.width()), u32::from(font.height()));
        let mono = profont_for(font);
        let style = MonoTextStyle::new(mono, fg);

        // center each glyph inside its fixed DWIN cell
        let dx = (cell.width.saturating_sub(mono.character_size.width)) as i32 / 2;
        let dy = (cell.height.saturating_sub(mono.character_size.height)) as i32 / 2;

        let mut buf = [0u8; 4];
        for (i, c) in text.chars().enumerate() {
            let cx = i32::from(x) + i as i32 * cell.width as i32;
            let cy = i32::from(y);
            if opaque {
                Rectangle::new(Point::new(cx, cy), cell)
                    .into_styled(PrimitiveStyle::with_fill(bg))
                    .draw(&mut self.display)
                    .ok();
            }
            if c != ' ' {
                let glyph = c.encode_utf8(&mut buf);
                Text::with_baseline(glyph, Point::new(cx + dx, cy + dy), style, Baseline::Top)
                    .draw(&mut self.display)
                    .ok();
            }
        }
    }

    fn draw_icon(&mut self, _lib: u8, icon: u8, x: u16, y: u16) {
        icons::draw(&mut self.display, icon, i32::from(x), i32::from(y));
    }

    fn animate_icon(
        &mut self,
        _lib: u8,
        animate: bool,
        first: u8,
        last: u8,
        x: u16,
        y: u16,
        interval_ms: u8,
    ) {
        // The hardware free-runs the animation; here the frame is derived
        // from wall time so a paused renderer freezes it exactly the same.
        if !animate {
            return;
        }
        let span = u64::from(last - first) + 1;
        let tick = self.started.elapsed().as_millis() as u64 / u64::from(interval_ms).max(1);
        let icon = first + (tick % span) as u8;
        icons::draw(&mut self.display, icon, i32::from(x), i32::from(y));
    }

    fn draw_rect(&mut self, mode: RectMode, color: Rgb565, x0: u16, y0: u16, x1: u16, y1: u16) {
        // DWIN rectangle corners are inclusive
        let area = Rectangle::new(
            Point::new(i32::from(x0), i32::from(y0)),
            Size::new(u32::from(x1 - x0) + 1, u32::from(y1 - y0) + 1),
        );
        let style = match mode {
            RectMode::Filled => PrimitiveStyle::with_fill(color),
            RectMode::Outline => PrimitiveStyleBuilder::new()
                .stroke_color(color)
                .stroke_width(1)
                .stroke_alignment(StrokeAlignment::Inside)
                .build(),
        };
        area.into_styled(style).draw(&mut self.display).ok();
    }
}
