//! Activity selection for generated routines.
//!
//! The builder never touches a random number generator directly. It asks an
//! [`ActivityPicker`] for every task, which lets production code draw from a
//! real RNG while tests script the exact sequence they want to assert on.

use coachr_common::coaching::activity::ActivityKind;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub trait ActivityPicker {
    /// Chooses the activity of the next task.
    fn pick(&mut self) -> ActivityKind;
}

impl<F> ActivityPicker for F
where
    F: FnMut() -> ActivityKind,
{
    fn pick(&mut self) -> ActivityKind {
        self()
    }
}

/// Picks uniformly among [`ActivityKind::ALL`].
#[derive(Debug, Clone)]
pub struct RandomPicker<R = StdRng> {
    rng: R,
}

impl<R: Rng> RandomPicker<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomPicker<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }

    /// Seeded when `seed` is set, otherwise seeded by the operating system.
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_os_rng(),
        }
    }
}

impl<R: Rng> ActivityPicker for RandomPicker<R> {
    fn pick(&mut self) -> ActivityKind {
        let idx: usize = self.rng.random_range(0..ActivityKind::ALL.len());
        ActivityKind::ALL[idx]
    }
}
