//! Status screen geometry and visibility plan.
//!
//! [`StatusLayout::new`] resolves the machine configuration into concrete
//! coordinates and the exact set of elements to draw, once at startup. The
//! renderers take the resulting plan plus a snapshot and never branch on
//! configuration themselves, so a frame is the same fixed sequence of draw
//! calls for the whole process lifetime.

use heapless::{String, Vec};

use crate::config::{Orientation, ProgressUnit, UiConfig};
use crate::icons::LOGO_WIDTH;
use crate::numfmt;
use crate::snapshot::HeaterId;

/// Logo row top, both orientations.
const LOGO_Y: u16 = 15;

/// Temperature/fan row top, both orientations.
const HEATER_ROW_Y: u16 = 60;
/// Hotend 0 column.
const HOTEND0_X: u16 = 15;
/// Second heater column (hotend 1 or bed).
const SLOT1_X: u16 = 85;
/// Fan column.
const FAN_X: u16 = 175;

/// Fixed-width format of one axis readout.
///
/// Portrait squeezes X and Y into 4 glyphs and only gives Z the full
/// two-decimal field; landscape has room for the full field on every axis.
/// The untrusted-axis blank is as wide as the value so it overwrites it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisValueFormat {
    /// 4-char truncated integer, `-123`.
    Signed4,
    /// 7-char two-decimal fixed point, `-123.45`.
    Fixed7,
}

impl AxisValueFormat {
    /// Format `position` for this slot.
    pub fn format(self, position: f32) -> String<7> {
        let mut s = String::new();
        match self {
            AxisValueFormat::Signed4 => {
                let _ = s.push_str(&numfmt::signed4(position));
            }
            AxisValueFormat::Fixed7 => {
                let _ = s.push_str(&numfmt::fixed7(position));
            }
        }
        s
    }

    /// All-spaces string of the field width.
    pub const fn blanks(self) -> &'static str {
        match self {
            AxisValueFormat::Signed4 => "    ",
            AxisValueFormat::Fixed7 => "       ",
        }
    }
}

/// Where and how one axis readout is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisSlot {
    pub x: u16,
    pub y: u16,
    pub format: AxisValueFormat,
}

/// Where one heater column is drawn and which heater it shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaterSlot {
    pub id: HeaterId,
    pub x: u16,
    pub y: u16,
}

/// Placement of the elapsed/remaining time field(s).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeLayout {
    /// Portrait: one right-aligned field at `y` showing elapsed or, while
    /// printing, the remaining estimate; with `rotate` the two alternate on
    /// the blink cadence.
    Rotating {
        y: u16,
        show_remaining: bool,
        rotate: bool,
    },
    /// Landscape: fixed elapsed position plus, when the printer estimates
    /// remaining time, a fixed remaining position below it.
    Fixed {
        elapsed: (u16, u16),
        remaining: Option<(u16, u16)>,
    },
}

/// Progress bar box, percent text row and progress unit handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressLayout {
    pub x0: u16,
    pub y0: u16,
    pub x1: u16,
    pub y1: u16,
    /// Baseline row of the centered percent text.
    pub text_y: u16,
    pub unit: ProgressUnit,
    /// Percent text with one decimal digit (permyriad input only).
    pub decimals: bool,
}

impl ProgressLayout {
    /// Fill width in pixels at 100%.
    pub const fn interior(&self) -> u16 {
        self.x1 - self.x0 - 2
    }
}

/// The resolved plan for one configuration: every coordinate, every element
/// that exists, and the per-slot value formats.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusLayout {
    pub width: u16,
    pub height: u16,
    /// Logo icon top-left, horizontally centered.
    pub logo: (u16, u16),
    /// Occupied heater columns; hotend 0, then hotend 1 or the bed.
    pub heaters: Vec<HeaterSlot, 2>,
    /// Fan column, `None` when the machine has no part fan.
    pub fan: Option<(u16, u16)>,
    /// Outline framing the axis readouts, `(x0, y0, x1, y1)`.
    pub axes_frame: (u16, u16, u16, u16),
    /// X, Y, Z readout slots in screen order.
    pub axes: [AxisSlot; 3],
    pub feedrate: (u16, u16),
    pub time: TimeLayout,
    pub progress: ProgressLayout,
    /// Top of the status message row.
    pub status_row_y: u16,
    /// Blank homed-but-untrusted axis values instead of showing them.
    pub warn_reduced_accuracy: bool,
}

impl StatusLayout {
    pub fn new(cfg: &UiConfig) -> Self {
        let (width, height) = cfg.orientation.screen_size();

        let mut heaters: Vec<HeaterSlot, 2> = Vec::new();
        let _ = heaters.push(HeaterSlot {
            id: HeaterId::Hotend(0),
            x: HOTEND0_X,
            y: HEATER_ROW_Y,
        });
        // A second hotend outranks the bed for the one remaining column.
        if cfg.hotends >= 2 {
            let _ = heaters.push(HeaterSlot {
                id: HeaterId::Hotend(1),
                x: SLOT1_X,
                y: HEATER_ROW_Y,
            });
        } else if cfg.heated_bed {
            let _ = heaters.push(HeaterSlot {
                id: HeaterId::Bed,
                x: SLOT1_X,
                y: HEATER_ROW_Y,
            });
        }

        let (axes_frame, axes, feedrate, time, progress, status_row_y) = match cfg.orientation {
            Orientation::Portrait => (
                (0, 163, width, 230),
                [
                    AxisSlot {
                        x: 5,
                        y: 165,
                        format: AxisValueFormat::Signed4,
                    },
                    AxisSlot {
                        x: 95,
                        y: 165,
                        format: AxisValueFormat::Signed4,
                    },
                    AxisSlot {
                        x: 165,
                        y: 165,
                        format: AxisValueFormat::Fixed7,
                    },
                ],
                (5, 250),
                TimeLayout::Rotating {
                    y: 250,
                    show_remaining: cfg.show_remaining_time,
                    rotate: cfg.rotate_progress,
                },
                ProgressLayout {
                    x0: 5,
                    y0: 300,
                    x1: width - 5,
                    y1: 360,
                    text_y: 312,
                    unit: cfg.progress_unit,
                    decimals: cfg.progress_decimals,
                },
                376,
            ),
            Orientation::Landscape => (
                (width - 106, 50, width - 1, 230),
                [
                    AxisSlot {
                        x: width - 104,
                        y: 52,
                        format: AxisValueFormat::Fixed7,
                    },
                    AxisSlot {
                        x: width - 104,
                        y: 111,
                        format: AxisValueFormat::Fixed7,
                    },
                    AxisSlot {
                        x: width - 104,
                        y: 169,
                        format: AxisValueFormat::Fixed7,
                    },
                ],
                (292, 60),
                TimeLayout::Fixed {
                    elapsed: (270, 100),
                    remaining: if cfg.show_remaining_time {
                        Some((270, 135))
                    } else {
                        None
                    },
                },
                ProgressLayout {
                    x0: 5,
                    y0: 170,
                    x1: width - 5 - 107,
                    y1: 230,
                    text_y: 182,
                    unit: cfg.progress_unit,
                    decimals: cfg.progress_decimals,
                },
                238,
            ),
        };

        Self {
            width,
            height,
            logo: (width / 2 - LOGO_WIDTH / 2, LOGO_Y),
            heaters,
            fan: if cfg.fan {
                Some((FAN_X, HEATER_ROW_Y))
            } else {
                None
            },
            axes_frame,
            axes,
            feedrate,
            time,
            progress,
            status_row_y,
            warn_reduced_accuracy: cfg.warn_reduced_accuracy,
        }
    }
}
