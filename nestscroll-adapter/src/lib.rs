//! Gesture coordination for the `nestscroll` crate.
//!
//! The `nestscroll` crate provides the drag distribution and the settling physics. This crate
//! wires them to a host UI without depending on one:
//!
//! - [`ScrollSurface`]: read/write access to the outer and inner scroll regions
//! - [`GestureEvent`] and [`PanTracker`]: the pan gesture as the host reports it
//! - [`GestureCoordinator`]: the drag/settle state machine
//! - [`FrameClock`]: turns frame timestamps into simulation steps
//!
//! This crate is intentionally framework-agnostic (no UIKit/winit/egui bindings).
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod clock;
mod coordinator;
mod gesture;
mod surface;

#[cfg(test)]
mod tests;

pub use clock::{FrameClock, MAX_FRAME_SECS, NOMINAL_FRAME_SECS};
pub use coordinator::{GestureCoordinator, Phase};
pub use gesture::{GestureEvent, PanTracker};
pub use surface::ScrollSurface;
