//! DWIN status screen simulator for desktop.
//!
//! Runs the renderer against a synthetic printer in an SDL2 window so the
//! layouts and the blink/mask protocol can be exercised without hardware.
//!
//! Flags: `--landscape` mounts the panel 480×272, `--permyriad` feeds
//! permyriad progress with decimal percent text.
//!
//! Keys: `P` pause/resume the job, `H` toggle homed, `T` toggle trusted,
//! `F` fan on/off, `R` restart the job, `Esc` quit.

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]

mod display;
mod icons;
mod model;
mod timing;

use std::process::ExitCode;
use std::thread;
use std::time::Instant;

use dwinui_core::colors::BG_BLACK;
use dwinui_core::{Orientation, ProgressUnit, StatusLayout, UiConfig, draw_status_screen};
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorEvent, Window};

use crate::display::DwinDisplay;
use crate::model::DemoPrinter;
use crate::timing::{BLINK_INTERVAL, FRAME_TIME};

fn parse_config() -> Option<UiConfig> {
    let mut cfg = UiConfig::new();
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--landscape" => cfg.orientation = Orientation::Landscape,
            "--permyriad" => {
                cfg.progress_unit = ProgressUnit::Permyriad;
                cfg.progress_decimals = true;
            }
            other => {
                eprintln!("unknown flag {other}; usage: simulator [--landscape] [--permyriad]");
                return None;
            }
        }
    }
    Some(cfg)
}

fn main() -> ExitCode {
    env_logger::init();

    let Some(cfg) = parse_config() else {
        return ExitCode::FAILURE;
    };
    let layout = StatusLayout::new(&cfg);
    log::info!(
        "starting {}x{} {:?} / {:?}",
        layout.width,
        layout.height,
        cfg.orientation,
        cfg.progress_unit
    );

    let mut display = DwinDisplay::new(layout.width, layout.height);
    let output_settings = OutputSettingsBuilder::new().scale(2).build();
    let mut window = Window::new("DWIN Status Screen Sim", &output_settings);

    display.clear(BG_BLACK);
    window.update(display.frame());

    let mut printer = DemoPrinter::new();
    let started = Instant::now();

    loop {
        let frame_start = Instant::now();

        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => return ExitCode::SUCCESS,
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    if repeat {
                        continue;
                    }
                    match keycode {
                        Keycode::Escape => return ExitCode::SUCCESS,
                        Keycode::P => {
                            printer.job_running = !printer.job_running;
                            log::info!(
                                "job {}",
                                if printer.job_running { "resumed" } else { "paused" }
                            );
                        }
                        Keycode::H => {
                            printer.homed = !printer.homed;
                            if !printer.homed {
                                printer.trusted = false;
                            }
                            log::info!("homed: {}", printer.homed);
                        }
                        Keycode::T => {
                            printer.trusted = !printer.trusted;
                            if printer.trusted {
                                printer.homed = true;
                            }
                            log::info!("trusted: {}", printer.trusted);
                        }
                        Keycode::F => {
                            printer.fan_on = !printer.fan_on;
                            log::info!("fan: {}", printer.fan_on);
                        }
                        Keycode::R => {
                            printer.restart();
                            log::info!("job restarted");
                        }
                        _ => {}
                    }
                }
                _ => {}
            }
        }

        printer.update(FRAME_TIME.as_secs_f32());
        let snapshot = printer.snapshot(&cfg);

        // 1 Hz blink, same cadence the firmware's UI timer uses
        let blink =
            (started.elapsed().as_millis() / BLINK_INTERVAL.as_millis()) % 2 == 0;

        draw_status_screen(&mut display, &layout, &snapshot, blink);
        window.update(display.frame());

        let spent = frame_start.elapsed();
        if spent < FRAME_TIME {
            thread::sleep(FRAME_TIME - spent);
        }
    }
}
