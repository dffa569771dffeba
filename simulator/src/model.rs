//! Synthetic printer feeding the renderer with plausible live data.
//!
//! Axis positions sweep on sine waves, heaters approach their targets with a
//! first-order lag, and a fake print job advances elapsed time, progress and
//! the remaining-time estimate. Keyboard toggles flip the homed/trusted/fan
//! flags so the blink protocol can be watched.

use dwinui_core::snapshot::{AxisSnapshot, HeaterSnapshot, PrinterSnapshot};
use dwinui_core::UiConfig;

/// Wall-clock length of the fake print job in seconds.
const JOB_DURATION: f32 = 300.0;

const AMBIENT: f32 = 22.0;
const HOTEND_TARGET: f32 = 210.0;
const BED_TARGET: f32 = 60.0;

const STATUS_MESSAGES: [&str; 4] = [
    "Printing Benchy.gcode",
    "Watch the blink protocol: H / T",
    "P pauses, R restarts the job",
    "F stops the part fan",
];

/// All mutable demo state; one instance lives for the whole run.
pub struct DemoPrinter {
    t: f32,
    pub homed: bool,
    pub trusted: bool,
    pub fan_on: bool,
    pub job_running: bool,
    elapsed: f32,
    hotend_temp: f32,
    bed_temp: f32,
}

impl DemoPrinter {
    pub fn new() -> Self {
        Self {
            t: 0.0,
            homed: true,
            trusted: true,
            fan_on: true,
            job_running: true,
            elapsed: 0.0,
            hotend_temp: AMBIENT,
            bed_temp: AMBIENT,
        }
    }

    /// Advance the demo by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        self.t += dt;
        if self.job_running {
            self.elapsed += dt;
            if self.elapsed >= JOB_DURATION {
                // loop the job so the bar can be watched filling again
                self.elapsed = 0.0;
                log::info!("job complete, restarting");
            }
        }

        // first-order heat-up toward the targets
        let (hotend_target, bed_target) = if self.job_running {
            (HOTEND_TARGET, BED_TARGET)
        } else {
            (AMBIENT, AMBIENT)
        };
        self.hotend_temp += (hotend_target - self.hotend_temp) * (dt * 0.08).min(1.0);
        self.bed_temp += (bed_target - self.bed_temp) * (dt * 0.04).min(1.0);
    }

    /// Restart the fake job from zero.
    pub fn restart(&mut self) {
        self.elapsed = 0.0;
        self.job_running = true;
    }

    /// Fraction of the job done, 0–1.
    fn fraction(&self) -> f32 {
        (self.elapsed / JOB_DURATION).clamp(0.0, 1.0)
    }

    /// Assemble the per-frame snapshot the renderer consumes.
    pub fn snapshot(&self, cfg: &UiConfig) -> PrinterSnapshot<'static> {
        let mut snap = PrinterSnapshot::new();

        let axis = |position: f32| AxisSnapshot {
            position,
            homed: self.homed,
            trusted: self.trusted,
        };
        snap.axes = [
            axis(sweep(self.t, 0.0, 220.0, 0.31)),
            axis(sweep(self.t, 0.0, 220.0, 0.23)),
            axis(sweep(self.t, 0.2, 48.6, 0.05)),
        ];

        snap.hotends[0] = HeaterSnapshot {
            current: self.hotend_temp,
            target: if self.job_running { HOTEND_TARGET } else { 0.0 },
            heating: self.job_running && self.hotend_temp < HOTEND_TARGET - 2.0,
        };
        snap.bed = Some(HeaterSnapshot {
            current: self.bed_temp,
            target: if self.job_running { BED_TARGET } else { 0.0 },
            heating: self.job_running && self.bed_temp < BED_TARGET - 1.0,
        });

        snap.fan_speed_percent = if self.fan_on { 100 } else { 0 };
        snap.feedrate_percent = 100 + (sweep(self.t, -25.0, 25.0, 0.11)) as i16;

        snap.job_running = self.job_running;
        snap.elapsed_secs = self.elapsed as u32;
        snap.remaining_secs = Some(((1.0 - self.fraction()) * JOB_DURATION) as u32);
        snap.progress = (self.fraction() * f32::from(cfg.progress_unit.max_raw())) as u16;

        let idx = (self.t / 10.0) as usize % STATUS_MESSAGES.len();
        snap.status_message = STATUS_MESSAGES[idx];
        snap
    }
}

impl Default for DemoPrinter {
    fn default() -> Self {
        Self::new()
    }
}

/// Sine sweep between `min` and `max` at `freq` rad/s.
fn sweep(t: f32, min: f32, max: f32, freq: f32) -> f32 {
    let normalized = (t * freq).sin().mul_add(0.5, 0.5);
    min + normalized * (max - min)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dwinui_core::ProgressUnit;

    #[test]
    fn test_job_progress_tracks_elapsed() {
        let cfg = UiConfig {
            progress_unit: ProgressUnit::Permyriad,
            ..UiConfig::new()
        };
        let mut printer = DemoPrinter::new();
        for _ in 0..((JOB_DURATION / 2.0) as usize * 50) {
            printer.update(0.02);
        }
        let snap = printer.snapshot(&cfg);
        assert!((4900..=5100).contains(&snap.progress), "progress {}", snap.progress);
        assert!(snap.remaining_secs.unwrap() <= JOB_DURATION as u32 / 2 + 1);
    }

    #[test]
    fn test_paused_job_holds_still() {
        let cfg = UiConfig::new();
        let mut printer = DemoPrinter::new();
        printer.update(5.0);
        printer.job_running = false;
        let before = printer.snapshot(&cfg);
        printer.update(5.0);
        let after = printer.snapshot(&cfg);
        assert_eq!(before.elapsed_secs, after.elapsed_secs);
        assert_eq!(before.progress, after.progress);
    }

    #[test]
    fn test_heaters_approach_targets() {
        let cfg = UiConfig::new();
        let mut printer = DemoPrinter::new();
        for _ in 0..5000 {
            printer.update(0.02);
        }
        let snap = printer.snapshot(&cfg);
        assert!(snap.hotends[0].current > HOTEND_TARGET - 5.0);
        assert!(snap.bed.unwrap().current > BED_TARGET - 5.0);
    }
}
