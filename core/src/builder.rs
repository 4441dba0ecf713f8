//! Routine generation.
//!
//! A [`RoutineConfig`] collects what the user asked for; [`build`] validates it
//! and lays out one task per available day. Days are assigned Monday first and
//! wrap around the week when more than seven days are requested. The same config
//! can be built more than once; each build draws fresh activities from the picker.

use std::sync::Arc;

use coachr_common::CoachError;
use coachr_common::coaching::profile::Profile;
use coachr_common::coaching::routine::{Routine, RoutineTask};
use coachr_common::coaching::weekday::Weekday;
use tracing::debug;

use crate::picker::ActivityPicker;

#[derive(Debug, Clone, Default)]
pub struct RoutineConfig {
    profile: Option<Arc<Profile>>,
    days_available: i32,
    hours_per_day: i32,
}

impl RoutineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_profile(mut self, profile: Arc<Profile>) -> Self {
        self.profile = Some(profile);
        self
    }

    pub fn with_days_available(mut self, days: i32) -> Self {
        self.days_available = days;
        self
    }

    pub fn with_hours_per_day(mut self, hours: i32) -> Self {
        self.hours_per_day = hours;
        self
    }
}

/// Generates a routine with one pending task per available day.
///
/// # Errors
/// * [`CoachError::MissingProfile`] - No profile was set on the config.
/// * [`CoachError::NegativeDays`] - `days_available` is below zero.
/// * [`CoachError::NegativeHours`] - `hours_per_day` is below zero.
pub fn build<P>(config: &RoutineConfig, picker: &mut P) -> Result<Routine, CoachError>
where
    P: ActivityPicker + ?Sized,
{
    let profile: Arc<Profile> = config.profile.clone().ok_or(CoachError::MissingProfile)?;
    let days: u32 = u32::try_from(config.days_available).map_err(|_| CoachError::NegativeDays {
        days: config.days_available,
    })?;
    let hours: u32 = u32::try_from(config.hours_per_day).map_err(|_| CoachError::NegativeHours {
        hours: config.hours_per_day,
    })?;

    let tasks: Vec<RoutineTask> = (0..days as usize)
        .map(|idx| RoutineTask::new(Weekday::nth(idx), hours, picker.pick()))
        .collect();

    debug!(profile = profile.name(), days, hours, "routine tasks generated");
    Ok(Routine::new(profile, days, hours, tasks))
}
