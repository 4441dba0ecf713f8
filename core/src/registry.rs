//! # Registry
//!
//! Keeps track of everything created during a run: the activities that were
//! instantiated, the registered profiles and the generated routines. All three
//! logs are append-only and keep insertion order.
//!
//! A registry is an ordinary value owned by its caller. Mutations take
//! `&mut self`; a caller sharing one across threads puts the whole registry
//! behind a single `Mutex`.

use std::sync::Arc;

use coachr_common::CoachError;
use coachr_common::coaching::activity::ActivityKind;
use coachr_common::coaching::profile::Profile;
use coachr_common::coaching::routine::Routine;
use coachr_common::config::{Config, Language};
use tracing::info;

use crate::builder::{self, RoutineConfig};
use crate::picker::{ActivityPicker, RandomPicker};
use crate::recommend;

pub struct Registry {
    activities: Vec<ActivityKind>,
    profiles: Vec<Arc<Profile>>,
    routines: Vec<Routine>,
    picker: Box<dyn ActivityPicker + Send>,
    language: Language,
}

impl Registry {
    pub fn new(picker: Box<dyn ActivityPicker + Send>) -> Self {
        Self {
            activities: Vec::new(),
            profiles: Vec::new(),
            routines: Vec::new(),
            picker,
            language: Language::default(),
        }
    }

    /// Registry with a [`RandomPicker`] seeded from `cfg.seed` and the configured language.
    pub fn from_config(cfg: &Config) -> Self {
        Self::new(Box::new(RandomPicker::from_seed(cfg.seed))).with_language(cfg.language)
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn add_activity(&mut self, activity: ActivityKind) {
        self.activities.push(activity);
        info!("Activity added: {activity}");
    }

    /// Records the profile and hands back the shared handle routines are built from.
    pub fn add_profile(&mut self, profile: Profile) -> Arc<Profile> {
        let profile: Arc<Profile> = Arc::new(profile);
        self.profiles.push(Arc::clone(&profile));
        info!("User Profile added: {profile}");
        profile
    }

    pub fn activity_history(&self) -> &[ActivityKind] {
        &self.activities
    }

    pub fn profiles(&self) -> &[Arc<Profile>] {
        &self.profiles
    }

    pub fn routines(&self) -> &[Routine] {
        &self.routines
    }

    /// # Errors
    /// * [`CoachError::InvalidHeight`] - The profile's BMI cannot be computed.
    pub fn routine_recommendations(&self, profile: &Profile) -> Result<[&'static str; 3], CoachError> {
        recommend::recommendations_for(profile, self.language)
    }

    /// Builds a routine for `profile`, stores it and returns it.
    ///
    /// # Errors
    /// Propagates the validation errors of [`builder::build`].
    pub fn create_routine(
        &mut self,
        profile: &Arc<Profile>,
        days_available: i32,
        hours_per_day: i32,
    ) -> Result<&Routine, CoachError> {
        let config: RoutineConfig = RoutineConfig::new()
            .with_profile(Arc::clone(profile))
            .with_days_available(days_available)
            .with_hours_per_day(hours_per_day);

        let routine: Routine = builder::build(&config, self.picker.as_mut())?;
        info!("Routine created: {routine}");

        let idx: usize = self.routines.len();
        self.routines.push(routine);
        Ok(&self.routines[idx])
    }

    /// Marks task `task` of routine `routine` as completed.
    ///
    /// # Errors
    /// * [`CoachError::RoutineNotFound`] - No routine at that index.
    /// * [`CoachError::TaskNotFound`] - The routine has no task at that index.
    pub fn mark_task_completed(&mut self, routine: usize, task: usize) -> Result<(), CoachError> {
        self.routines
            .get_mut(routine)
            .ok_or(CoachError::RoutineNotFound { index: routine })?
            .mark_task_completed(task)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new(Box::new(RandomPicker::from_os_rng()))
    }
}
