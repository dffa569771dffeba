//! Status screen renderer for DWIN-style smart displays on 3D printers.
//!
//! Draws the live print status — axis positions, heater temperatures, fan
//! speed, feed-rate, elapsed/remaining time and progress — through the four
//! drawing commands of a DWIN smart display:
//!
//! - [`display`]: the [`DisplayDriver`](display::DisplayDriver) hardware seam
//! - [`config`]: immutable machine/orientation description
//! - [`layout`]: the geometry plan resolved once from the config
//! - [`snapshot`]: per-frame view-model filled by the caller
//! - [`widgets`]: one draw function per screen element
//! - [`screens`]: the frame orchestrator
//! - [`numfmt`]: fixed-width numeric and clock formatting
//!
//! The renderer is stateless per call: each tick the caller assembles a
//! [`PrinterSnapshot`](snapshot::PrinterSnapshot) and a blink flag and gets
//! one complete frame. Axis positions an unhomed or untrusted machine cannot
//! vouch for are not shown as literal text; they flicker against the blink
//! cadence as `?` masks or blanks.
//!
//! # Testing
//!
//! The crate is `no_std` on targets but keeps `std` under test, so
//! `cargo test -p dwinui-core` runs everything on the host against a
//! recording display driver.

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod colors;
pub mod config;
pub mod display;
pub mod icons;
pub mod layout;
pub mod numfmt;
pub mod screens;
pub mod snapshot;
pub mod widgets;

// Re-export the per-frame entry points and their inputs
pub use config::{Orientation, ProgressUnit, UiConfig};
pub use display::{DisplayDriver, Font, RectMode};
pub use layout::StatusLayout;
pub use screens::draw_status_screen;
pub use snapshot::{Axis, AxisSnapshot, HeaterId, HeaterSnapshot, PrinterSnapshot};
