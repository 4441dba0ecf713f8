//! The coaching engine.
//!
//! * [`builder`]: turns a [`builder::RoutineConfig`] into a routine.
//! * [`picker`]: the source of activity choices the builder draws from.
//! * [`recommend`]: BMI classification and its recommendation table.
//! * [`registry`]: the run-wide record of profiles, activities and routines.

pub mod builder;
pub mod picker;
pub mod recommend;
pub mod registry;
