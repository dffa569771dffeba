//! Per-frame view-model of the printer.
//!
//! The renderer owns no live data. Each tick the caller assembles a
//! [`PrinterSnapshot`] from the motion, thermal and job subsystems and the
//! whole frame is drawn from that one value, so the screen can never tear
//! across data sources mid-frame. Nothing here is retained between calls.

/// Motion axes shown on the status screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Axis {
    X = 0,
    Y = 1,
    Z = 2,
}

/// All axes in screen order.
pub const AXES: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

impl Axis {
    /// Single-glyph axis label.
    pub const fn label(self) -> char {
        match self {
            Axis::X => 'X',
            Axis::Y => 'Y',
            Axis::Z => 'Z',
        }
    }
}

/// One axis as reported by the motion subsystem.
///
/// `homed` and `trusted` are the motion planner's own trust flags: an axis
/// is homed once it referenced an endstop, and trusted until an event such
/// as a stall or a motor disable invalidates the position. `trusted` implies
/// `homed` in practice; the renderer does not enforce it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AxisSnapshot {
    /// Logical (workspace) position in millimeters.
    pub position: f32,
    pub homed: bool,
    pub trusted: bool,
}

/// Identifies a heater on the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HeaterId {
    Hotend(u8),
    Bed,
}

/// One heater as reported by the thermal subsystem.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HeaterSnapshot {
    /// Current temperature in °C.
    pub current: f32,
    /// Target temperature in °C, 0 when off.
    pub target: f32,
    /// Heater output is currently driving toward the target.
    pub heating: bool,
}

/// Everything the status screen shows, sampled once per frame.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PrinterSnapshot<'a> {
    pub axes: [AxisSnapshot; 3],
    /// Hotend 0 is always present; hotend 1 is only read on two-hotend
    /// configurations.
    pub hotends: [HeaterSnapshot; 2],
    pub bed: Option<HeaterSnapshot>,
    /// Part-cooling fan duty, 0–100.
    pub fan_speed_percent: u8,
    /// Feed-rate override, nominally 100.
    pub feedrate_percent: i16,
    pub elapsed_secs: u32,
    /// Remaining-time estimate; `None` while no estimate exists.
    pub remaining_secs: Option<u32>,
    pub job_running: bool,
    /// Raw progress in the configured unit (percent or permyriad).
    pub progress: u16,
    /// One-line status text for the bottom row.
    pub status_message: &'a str,
}

impl<'a> PrinterSnapshot<'a> {
    pub const fn new() -> Self {
        Self {
            axes: [
                AxisSnapshot {
                    position: 0.0,
                    homed: false,
                    trusted: false,
                };
                3
            ],
            hotends: [
                HeaterSnapshot {
                    current: 0.0,
                    target: 0.0,
                    heating: false,
                };
                2
            ],
            bed: None,
            fan_speed_percent: 0,
            feedrate_percent: 100,
            elapsed_secs: 0,
            remaining_secs: None,
            job_running: false,
            progress: 0,
            status_message: "",
        }
    }

    pub const fn axis(&self, axis: Axis) -> &AxisSnapshot {
        &self.axes[axis as usize]
    }

    /// Readings for `id`, `None` when the machine lacks that heater.
    pub fn heater(&self, id: HeaterId) -> Option<&HeaterSnapshot> {
        match id {
            HeaterId::Hotend(n) => self.hotends.get(usize::from(n)),
            HeaterId::Bed => self.bed.as_ref(),
        }
    }
}

impl<'a> Default for PrinterSnapshot<'a> {
    fn default() -> Self {
        Self::new()
    }
}
