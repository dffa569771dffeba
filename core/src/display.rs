//! Display driver contract.
//!
//! DWIN-style smart displays are driven over a serial link with a small set
//! of drawing commands; fonts and icon artwork live in the display's own
//! flash. The renderer only needs the four commands below, so the whole
//! hardware seam is this one trait. The simulator implements it on top of
//! `embedded-graphics`; a firmware build implements it on the UART codec.
//!
//! Commands are fire-and-forget: the wire protocol queues them without a
//! synchronous reply, so the methods return nothing and transport errors
//! stay inside the driver.

use embedded_graphics::pixelcolor::Rgb565;

/// Built-in bitmap fonts of the display controller.
///
/// The id doubles as the wire encoding. The status screen only uses
/// [`Font::F14x28`] for values and [`Font::F16x32`] for labels and the
/// progress percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Font {
    F6x12 = 0x00,
    F8x16 = 0x01,
    F10x20 = 0x02,
    F12x24 = 0x03,
    F14x28 = 0x04,
    F16x32 = 0x05,
    F20x40 = 0x06,
    F24x48 = 0x07,
    F28x56 = 0x08,
    F32x64 = 0x09,
}

impl Font {
    /// Glyph cell width in pixels.
    pub const fn width(self) -> u16 {
        match self {
            Font::F6x12 => 6,
            Font::F8x16 => 8,
            Font::F10x20 => 10,
            Font::F12x24 => 12,
            Font::F14x28 => 14,
            Font::F16x32 => 16,
            Font::F20x40 => 20,
            Font::F24x48 => 24,
            Font::F28x56 => 28,
            Font::F32x64 => 32,
        }
    }

    /// Glyph cell height in pixels, always twice the width.
    pub const fn height(self) -> u16 {
        self.width() * 2
    }
}

/// Rectangle draw mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RectMode {
    Outline,
    Filled,
}

/// Drawing commands of a DWIN-style display.
///
/// Coordinates are in display pixels with the origin at the top left of the
/// configured orientation. Rectangle corner coordinates are inclusive, as on
/// the real controller.
pub trait DisplayDriver {
    /// Draw `text` with its top-left corner at `(x, y)`.
    ///
    /// With `opaque` set the glyph background cells are painted in `bg`,
    /// which is how the status screen overwrites stale values without
    /// clearing; without it only the glyph pixels are drawn.
    #[allow(clippy::too_many_arguments)]
    fn draw_string(
        &mut self,
        opaque: bool,
        font: Font,
        fg: Rgb565,
        bg: Rgb565,
        x: u16,
        y: u16,
        text: &str,
    );

    /// Draw icon `icon` from library `lib` with its top-left at `(x, y)`.
    fn draw_icon(&mut self, lib: u8, icon: u8, x: u16, y: u16);

    /// Start or stop a hardware icon animation cycling `first..=last`.
    ///
    /// While `animate` is set the display redraws the sequence on its own
    /// every `interval_ms` without further commands; clearing it freezes
    /// the animation.
    #[allow(clippy::too_many_arguments)]
    fn animate_icon(
        &mut self,
        lib: u8,
        animate: bool,
        first: u8,
        last: u8,
        x: u16,
        y: u16,
        interval_ms: u8,
    );

    /// Draw a rectangle spanning `(x0, y0)` to `(x1, y1)` inclusive.
    fn draw_rect(&mut self, mode: RectMode, color: Rgb565, x0: u16, y0: u16, x1: u16, y1: u16);
}

// =============================================================================
// Test support
// =============================================================================

#[cfg(test)]
pub(crate) mod recording {
    //! A driver that records every command so renderer tests can assert on
    //! the exact text, icons and rectangles a frame produced.

    use super::{DisplayDriver, Font, RectMode};
    use embedded_graphics::pixelcolor::Rgb565;

    #[derive(Debug, Clone, PartialEq)]
    pub enum Op {
        Text {
            opaque: bool,
            font: Font,
            fg: Rgb565,
            bg: Rgb565,
            x: u16,
            y: u16,
            text: String,
        },
        Icon {
            lib: u8,
            icon: u8,
            x: u16,
            y: u16,
        },
        Anim {
            lib: u8,
            animate: bool,
            first: u8,
            last: u8,
            x: u16,
            y: u16,
            interval_ms: u8,
        },
        Rect {
            mode: RectMode,
            color: Rgb565,
            x0: u16,
            y0: u16,
            x1: u16,
            y1: u16,
        },
    }

    #[derive(Debug, Default)]
    pub struct RecordingDriver {
        pub ops: Vec<Op>,
    }

    impl RecordingDriver {
        pub fn new() -> Self {
            Self { ops: Vec::new() }
        }

        /// All recorded strings in draw order.
        pub fn texts(&self) -> Vec<&str> {
            self.ops
                .iter()
                .filter_map(|op| match op {
                    Op::Text { text, .. } => Some(text.as_str()),
                    _ => None,
                })
                .collect()
        }

        /// The string drawn at exactly `(x, y)`, if any.
        pub fn text_at(&self, x: u16, y: u16) -> Option<&str> {
            self.ops.iter().find_map(|op| match op {
                Op::Text {
                    x: ox, y: oy, text, ..
                } if *ox == x && *oy == y => Some(text.as_str()),
                _ => None,
            })
        }

        /// All filled rectangles in draw order as `(x0, y0, x1, y1)`.
        pub fn filled_rects(&self) -> Vec<(u16, u16, u16, u16)> {
            self.ops
                .iter()
                .filter_map(|op| match op {
                    Op::Rect {
                        mode: RectMode::Filled,
                        x0,
                        y0,
                        x1,
                        y1,
                        ..
                    } => Some((*x0, *y0, *x1, *y1)),
                    _ => None,
                })
                .collect()
        }

        /// All icon draws in draw order as `(icon, x, y)`.
        pub fn icons(&self) -> Vec<(u8, u16, u16)> {
            self.ops
                .iter()
                .filter_map(|op| match op {
                    Op::Icon { icon, x, y, .. } => Some((*icon, *x, *y)),
                    _ => None,
                })
                .collect()
        }
    }

    impl DisplayDriver for RecordingDriver {
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
            self.ops.push(Op::Text {
                opaque,
                font,
                fg,
                bg,
                x,
                y,
                text: text.to_owned(),
            });
        }

        fn draw_icon(&mut self, lib: u8, icon: u8, x: u16, y: u16) {
            self.ops.push(Op::Icon { lib, icon, x, y });
        }

        fn animate_icon(
            &mut self,
            lib: u8,
            animate: bool,
            first: u8,
            last: u8,
            x: u16,
            y: u16,
            interval_ms: u8,
        ) {
            self.ops.push(Op::Anim {
                lib,
                animate,
                first,
                last,
                x,
                y,
                interval_ms,
            });
        }

        fn draw_rect(
            &mut self,
            mode: RectMode,
            color: Rgb565,
            x0: u16,
            y0: u16,
            x1: u16,
            y1: u16,
        ) {
            self.ops.push(Op::Rect {
                mode,
                color,
                x0,
                y0,
                x1,
                y1,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_metrics() {
        assert_eq!(Font::F14x28.width(), 14);
        assert_eq!(Font::F14x28.height(), 28);
        assert_eq!(Font::F16x32.width(), 16);
        assert_eq!(Font::F16x32.height(), 32);
    }

    #[test]
    fn test_font_wire_ids_are_consecutive() {
        assert_eq!(Font::F6x12 as u8, 0x00);
        assert_eq!(Font::F14x28 as u8, 0x04);
        assert_eq!(Font::F16x32 as u8, 0x05);
        assert_eq!(Font::F32x64 as u8, 0x09);
    }
}
