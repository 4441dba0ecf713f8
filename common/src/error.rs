use thiserror::Error;

/// Validation failures raised by the coaching models and the routine engine.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoachError {
    #[error("invalid height: {height} m (must be a positive, finite number)")]
    InvalidHeight { height: f64 },

    #[error("invalid days available: {days} (must not be negative)")]
    NegativeDays { days: i32 },

    #[error("invalid hours per day: {hours} (must not be negative)")]
    NegativeHours { hours: i32 },

    #[error("routine configuration has no profile")]
    MissingProfile,

    #[error("routine #{index} does not exist")]
    RoutineNotFound { index: usize },

    #[error("task #{index} does not exist in a routine of {len} tasks")]
    TaskNotFound { index: usize, len: usize },
}
