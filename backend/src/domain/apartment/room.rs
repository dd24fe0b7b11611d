//! Rooms and their floor area.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::ApartmentValidationError;

/// Floor area in square metres.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct SquareMeter(f64);

impl SquareMeter {
    /// Validate and construct an area.
    ///
    /// # Examples
    /// ```
    /// use rental::domain::SquareMeter;
    ///
    /// assert!(SquareMeter::new(12.5).is_ok());
    /// assert!(SquareMeter::new(0.0).is_err());
    /// ```
    pub fn new(value: f64) -> Result<Self, ApartmentValidationError> {
        if !value.is_finite() || value <= 0.0 {
            return Err(ApartmentValidationError::NonPositiveArea { value });
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for SquareMeter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} m2", self.0)
    }
}

impl From<SquareMeter> for f64 {
    fn from(value: SquareMeter) -> Self {
        value.0
    }
}

impl TryFrom<f64> for SquareMeter {
    type Error = ApartmentValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// A named room of an apartment.
#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    name: String,
    size: SquareMeter,
}

impl Room {
    /// Build a room, rejecting blank names.
    pub fn new(
        name: impl Into<String>,
        size: SquareMeter,
    ) -> Result<Self, ApartmentValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ApartmentValidationError::EmptyRoomName);
        }
        Ok(Self { name, size })
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn size(&self) -> SquareMeter {
        self.size
    }
}
