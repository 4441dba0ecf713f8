//! # Activity Catalog
//!
//! The catalog is a closed set. Adding a kind means adding a variant to
//! [`ActivityKind`], its arms in [`ActivityKind::label`] and
//! [`ActivityKind::short_label`], an entry in [`ActivityKind::ALL`] and a
//! constructor below. Every `match` on the enum is exhaustive, so the
//! compiler lists whatever else needs to follow.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActivityKind {
    Cardio,
    Strength,
    Yoga,
}

impl ActivityKind {
    /// Every kind, in catalog order. Routine generation draws from this list.
    pub const ALL: [ActivityKind; 3] = [
        ActivityKind::Cardio,
        ActivityKind::Strength,
        ActivityKind::Yoga,
    ];

    /// Catalog name of the activity.
    pub fn label(self) -> &'static str {
        match self {
            ActivityKind::Cardio => "Cardio",
            ActivityKind::Strength => "Entrenamiento de Fuerza",
            ActivityKind::Yoga => "Yoga",
        }
    }

    /// Name used when the activity is scheduled inside a routine.
    pub fn short_label(self) -> &'static str {
        match self {
            ActivityKind::Cardio => "Cardio",
            ActivityKind::Strength => "Fuerza",
            ActivityKind::Yoga => "Yoga",
        }
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub fn cardio() -> ActivityKind {
    ActivityKind::Cardio
}

pub fn strength_training() -> ActivityKind {
    ActivityKind::Strength
}

pub fn yoga() -> ActivityKind {
    ActivityKind::Yoga
}
