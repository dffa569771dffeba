//! Icon ids for the status screen icon set.
//!
//! The display stores icon artwork in numbered libraries flashed to its SPI
//! memory; a draw command addresses a library plus an icon index within it.
//! The ids here must match the order the icons were packed into the `.ICO`
//! library when the display was provisioned.

/// Icon library holding the status screen artwork.
pub const LIB: u8 = 7;

/// Boot/status logo, 130 px wide.
pub const LOGO: u8 = 0;

/// Hotend, heater idle.
pub const HOTEND_OFF: u8 = 1;
/// Hotend, heater driving.
pub const HOTEND_ON: u8 = 2;
/// Heated bed, heater idle.
pub const BED_OFF: u8 = 3;
/// Heated bed, heater driving.
pub const BED_ON: u8 = 4;

/// First fan animation frame, also the static "fan off" icon.
pub const FAN_0: u8 = 5;
pub const FAN_1: u8 = 6;
pub const FAN_2: u8 = 7;
/// Last fan animation frame.
pub const FAN_3: u8 = 8;

/// Width of the logo icon in pixels, used to center it.
pub const LOGO_WIDTH: u16 = 130;

// On/off variants must stay adjacent: heater icon selection adds the
// heating flag to the "off" id.
const _: () = assert!(HOTEND_ON == HOTEND_OFF + 1);
const _: () = assert!(BED_ON == BED_OFF + 1);
const _: () = assert!(FAN_3 == FAN_0 + 3);
