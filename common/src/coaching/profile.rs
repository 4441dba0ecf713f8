//! # User Profile
//!
//! A [`Profile`] is built once from raw user input and never changes afterwards.
//! No validation happens at construction; the only invariant that matters,
//! a positive height, is checked when the BMI is computed.

use std::fmt;

use crate::error::CoachError;

#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    name: String,
    weight_kg: f64,
    height_m: f64,
    age: u32,
    availability: String,
}

impl Profile {
    pub fn new(
        name: impl Into<String>,
        weight_kg: f64,
        height_m: f64,
        age: u32,
        availability: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            weight_kg,
            height_m,
            age,
            availability: availability.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    pub fn height_m(&self) -> f64 {
        self.height_m
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn availability(&self) -> &str {
        &self.availability
    }

    /// Body-mass index: weight in kilograms over the square of the height in meters.
    ///
    /// # Errors
    /// * [`CoachError::InvalidHeight`] - If the height is zero, negative or not finite.
    pub fn bmi(&self) -> Result<f64, CoachError> {
        if !self.height_m.is_finite() || self.height_m <= 0.0 {
            return Err(CoachError::InvalidHeight {
                height: self.height_m,
            });
        }
        Ok(self.weight_kg / (self.height_m * self.height_m))
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Usuario: {}, Peso: {:?}kg, Estatura: {:?}m, Edad: {}, Disponibilidad: {}",
            self.name, self.weight_kg, self.height_m, self.age, self.availability
        )
    }
}
