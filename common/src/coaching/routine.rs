//! # Routines
//!
//! A [`Routine`] is the output of the routine builder: one [`RoutineTask`] per
//! available day, all sharing the same duration. Membership and order of the
//! tasks are fixed once the routine exists; only the completion flag of a task
//! can change, and only from pending to completed.

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::coaching::activity::ActivityKind;
use crate::coaching::profile::Profile;
use crate::coaching::weekday::Weekday;
use crate::error::CoachError;

/// One scheduled session inside a routine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutineTask {
    day: Weekday,
    hours: u32,
    activity: ActivityKind,
    completed: bool,
}

impl RoutineTask {
    /// Creates a pending task.
    pub fn new(day: Weekday, hours: u32, activity: ActivityKind) -> Self {
        Self {
            day,
            hours,
            activity,
            completed: false,
        }
    }

    pub fn day(&self) -> Weekday {
        self.day
    }

    pub fn hours(&self) -> u32 {
        self.hours
    }

    pub fn activity(&self) -> ActivityKind {
        self.activity
    }

    pub fn activity_label(&self) -> &'static str {
        self.activity.short_label()
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Marks the task as done. Calling it again has no effect.
    pub fn mark_completed(&mut self) {
        self.completed = true;
    }
}

impl fmt::Display for RoutineTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.completed {
            "Completado"
        } else {
            "No completado"
        };
        write!(
            f,
            "{}: {} horas de {} - {}",
            self.day,
            self.hours,
            self.activity_label(),
            status
        )
    }
}

#[derive(Debug, Clone)]
pub struct Routine {
    profile: Arc<Profile>,
    days_available: u32,
    hours_per_day: u32,
    tasks: Vec<RoutineTask>,
}

impl Routine {
    /// Assembles a routine from already generated tasks.
    ///
    /// Callers are expected to pass exactly `days_available` tasks; the routine
    /// builder in `coachr-core` is the one place that does.
    pub fn new(
        profile: Arc<Profile>,
        days_available: u32,
        hours_per_day: u32,
        tasks: Vec<RoutineTask>,
    ) -> Self {
        debug_assert_eq!(tasks.len(), days_available as usize);
        Self {
            profile,
            days_available,
            hours_per_day,
            tasks,
        }
    }

    pub fn profile(&self) -> &Arc<Profile> {
        &self.profile
    }

    pub fn days_available(&self) -> u32 {
        self.days_available
    }

    pub fn hours_per_day(&self) -> u32 {
        self.hours_per_day
    }

    pub fn tasks(&self) -> &[RoutineTask] {
        &self.tasks
    }

    /// # Errors
    /// * [`CoachError::TaskNotFound`] - If `index` is past the last task.
    pub fn mark_task_completed(&mut self, index: usize) -> Result<(), CoachError> {
        let len = self.tasks.len();
        let task = self
            .tasks
            .get_mut(index)
            .ok_or(CoachError::TaskNotFound { index, len })?;
        task.mark_completed();
        debug!(day = %task.day(), "task marked as completed");
        Ok(())
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|task| task.is_completed()).count()
    }

    pub fn total_hours(&self) -> u64 {
        self.tasks.iter().map(|task| u64::from(task.hours())).sum()
    }
}

impl fmt::Display for Routine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rutina para {}, Días disponibles: {}, Horas por día: {}",
            self.profile, self.days_available, self.hours_per_day
        )
    }
}
