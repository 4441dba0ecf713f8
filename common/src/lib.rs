//! Shared building blocks of `coachr`.
//!
//! Everything the engine and the terminal front-end agree on lives here:
//! the coaching models, the run configuration and the error type.

pub mod coaching;
pub mod config;
pub mod error;

pub use error::CoachError;
