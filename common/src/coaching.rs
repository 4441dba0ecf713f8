//! # Coaching Models
//!
//! * [`profile::Profile`]: physical attributes and availability of a user.
//! * [`activity::ActivityKind`]: the closed catalog of exercise categories.
//! * [`routine::Routine`]: a generated week of [`routine::RoutineTask`]s for one profile.
//! * [`weekday::Weekday`]: the fixed, Monday-first day sequence tasks are scheduled on.

pub mod activity;
pub mod profile;
pub mod routine;
pub mod weekday;
