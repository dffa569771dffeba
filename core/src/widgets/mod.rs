//! One draw function per status screen element.
//!
//! Widgets are free functions over the [`DisplayDriver`](crate::display::DisplayDriver)
//! trait: they take their slot from the resolved layout plus the snapshot
//! values they show, and hold no state of their own.

pub mod axis;
pub mod fan;
pub mod feedrate;
pub mod heater;
pub mod progress;

pub use axis::draw_axis_value;
pub use fan::draw_fan_status;
pub use feedrate::draw_feedrate_status;
pub use heater::draw_heater_status;
pub use progress::{draw_progress, draw_time};
