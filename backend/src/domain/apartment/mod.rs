//! Apartment aggregate and the value objects it owns.
//!
//! An [`Apartment`] is the aggregate root for its [`Address`] and [`Room`]s.
//! It is assembled through [`ApartmentBuilder`] from flat fields, receives its
//! identifier from a persistence adapter, and produces [`crate::domain::Booking`]
//! values when booked.

use std::fmt;

use crate::domain::ports::EventChannelError;

mod address;
mod aggregate;
mod builder;
mod ids;
mod room;
mod validation;

pub use address::{Address, AddressDraft};
pub use aggregate::{Apartment, ApartmentDraft};
pub use builder::{ApartmentBuilder, RoomsDefinition};
pub use ids::{ApartmentId, OwnerId};
pub use room::{Room, SquareMeter};

/// Validation errors raised while assembling an apartment.
#[derive(Debug, Clone, PartialEq)]
pub enum ApartmentValidationError {
    InvalidId { raw: String },
    IdAlreadyAssigned { id: ApartmentId },
    EmptyOwnerId,
    MissingAddressField { field: &'static str },
    EmptyRoomName,
    NonPositiveArea { value: f64 },
    NoRooms,
    DuplicateRoomName { name: String },
}

impl fmt::Display for ApartmentValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidId { raw } => {
                write!(f, "apartment id must be a valid UUID (got {raw:?})")
            }
            Self::IdAlreadyAssigned { id } => {
                write!(f, "apartment already has id {id}")
            }
            Self::EmptyOwnerId => write!(f, "owner id must not be empty"),
            Self::MissingAddressField { field } => {
                write!(f, "address field {field} must not be blank")
            }
            Self::EmptyRoomName => write!(f, "room name must not be blank"),
            Self::NonPositiveArea { value } => {
                write!(f, "room area must be finite and positive (got {value})")
            }
            Self::NoRooms => write!(f, "apartment must have at least one room"),
            Self::DuplicateRoomName { name } => {
                write!(f, "apartment has duplicate room name {name:?}")
            }
        }
    }
}

impl std::error::Error for ApartmentValidationError {}

/// Failures raised by [`Apartment::book`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BookingError {
    /// Bookings must reference a persisted apartment id.
    #[error("apartment must be saved before it can be booked")]
    ApartmentNotPersisted,
    /// The event channel refused the `ApartmentBooked` event.
    #[error("apartment booked event was not published: {0}")]
    EventPublishFailed(#[from] EventChannelError),
}
