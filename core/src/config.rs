//! Printer-side feature configuration for the status screen.
//!
//! One [`UiConfig`] value is built at startup from whatever the host knows
//! about the machine and stays fixed for the process lifetime; the layout is
//! resolved from it exactly once. No printer feature is a compile-time
//! switch, so one binary can drive any machine/orientation combination.

/// Physical mounting orientation of the 480×272 panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Orientation {
    /// 272 wide × 480 tall.
    #[default]
    Portrait,
    /// 480 wide × 272 tall.
    Landscape,
}

impl Orientation {
    /// Screen size as `(width, height)` in pixels.
    pub const fn screen_size(self) -> (u16, u16) {
        match self {
            Orientation::Portrait => (272, 480),
            Orientation::Landscape => (480, 272),
        }
    }
}

/// Unit of the raw progress value supplied each frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ProgressUnit {
    /// Whole percent, 0–100.
    #[default]
    Percent,
    /// Parts per ten thousand, 0–10000, for sub-percent resolution.
    Permyriad,
}

impl ProgressUnit {
    /// Divisor that brings a raw progress value down to whole percent.
    pub const fn scale(self) -> u16 {
        match self {
            ProgressUnit::Percent => 1,
            ProgressUnit::Permyriad => 100,
        }
    }

    /// Raw value meaning "job complete".
    pub const fn max_raw(self) -> u16 {
        self.scale() * 100
    }
}

/// Immutable machine/display description the layout is resolved from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UiConfig {
    pub orientation: Orientation,
    /// Number of hotends, 1 or 2. The screen has room for two heaters; with
    /// a second hotend it takes precedence over the bed in the second slot.
    pub hotends: u8,
    pub heated_bed: bool,
    pub fan: bool,
    /// Printer reports a remaining-time estimate.
    pub show_remaining_time: bool,
    /// Portrait only: alternate the single time field between elapsed and
    /// remaining on the blink cadence instead of pinning it to remaining
    /// while printing.
    pub rotate_progress: bool,
    pub progress_unit: ProgressUnit,
    /// Show the progress percentage with one decimal digit. Only meaningful
    /// with [`ProgressUnit::Permyriad`] input.
    pub progress_decimals: bool,
    /// Blank axis values that are homed but no longer trusted. Builds that
    /// re-home after motor deactivation keep showing the literal value.
    pub warn_reduced_accuracy: bool,
}

impl UiConfig {
    pub const fn new() -> Self {
        Self {
            orientation: Orientation::Portrait,
            hotends: 1,
            heated_bed: true,
            fan: true,
            show_remaining_time: true,
            rotate_progress: false,
            progress_unit: ProgressUnit::Percent,
            progress_decimals: false,
            warn_reduced_accuracy: true,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_sizes_are_transposed() {
        let (pw, ph) = Orientation::Portrait.screen_size();
        let (lw, lh) = Orientation::Landscape.screen_size();
        assert_eq!((pw, ph), (lh, lw));
    }

    #[test]
    fn test_progress_scale() {
        assert_eq!(ProgressUnit::Percent.scale(), 1);
        assert_eq!(ProgressUnit::Permyriad.scale(), 100);
        assert_eq!(ProgressUnit::Percent.max_raw(), 100);
        assert_eq!(ProgressUnit::Permyriad.max_raw(), 10000);
    }
}
