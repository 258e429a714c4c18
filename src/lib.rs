//! A headless engine for nested vertical scrolling.
//!
//! One drag gesture is shared between an outer scroll region and an inner region nested inside
//! its content, so the pair scrolls like a single surface. After release, a simulated fling
//! keeps moving the pair, and an outer region pulled past its top springs back.
//!
//! The crate is UI-agnostic and does no I/O. It provides:
//! - [`distribute`], which splits each incremental drag delta between the two regions
//! - [`Simulator`], a one-slot integrator for [`Behavior::Inertial`] and [`Behavior::Bounce`]
//!
//! For the gesture state machine that ties them to real scroll views, see the
//! `nestscroll-adapter` crate.
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod behavior;
mod distributor;
mod error;
mod options;
mod simulator;
mod types;


pub use behavior::{Behavior, SimulatedPoint};
pub use distributor::{bounce_factor, distribute, distribute_with_ratio, headroom};
pub use error::OptionsError;
pub use options::PhysicsOptions;
pub use simulator::{BehaviorId, Simulator};
pub use types::{
    BehaviorKind, DEFAULT_BOUNCE_THRESHOLD_RATIO, Distribution, Motion, ScrollState, TickResult,
};
