//! Domain primitives, aggregates, and services.
//!
//! Purpose: Define strongly typed rental entities and the ports through which
//! they reach persistence and event delivery. Types are immutable once built;
//! invariants are documented on each type and enforced by its constructor.
//!
//! Public surface:
//! - Apartment (aggregate root) with its Address, Room, and SquareMeter values,
//!   assembled by ApartmentBuilder.
//! - Period, Booking, and TenantId values produced by booking.
//! - ApartmentBooked and RentalEvent domain events.
//! - ApartmentService implementing the ApartmentCommand driving port.
//! - DomainError / ErrorCode transport-agnostic failure payloads.

pub mod apartment;
pub mod apartment_events;
pub mod apartment_service;
pub mod booking;
pub mod error;
pub mod period;
pub mod ports;

pub use self::apartment::{
    Address, AddressDraft, Apartment, ApartmentBuilder, ApartmentDraft, ApartmentId,
    ApartmentValidationError, BookingError, OwnerId, Room, RoomsDefinition, SquareMeter,
};
pub use self::apartment_events::{ApartmentBooked, RentalEvent};
pub use self::apartment_service::ApartmentService;
pub use self::booking::{Booking, BookingValidationError, RentalType, TenantId};
pub use self::error::{DomainError, DomainErrorValidationError, ErrorCode};
pub use self::period::{Period, PeriodValidationError};

/// Convenient domain result alias.
///
/// # Examples
/// ```
/// use rental::domain::{DomainResult, DomainError};
///
/// fn lookup() -> DomainResult<()> {
///     Err(DomainError::not_found("apartment missing"))
/// }
/// assert!(lookup().is_err());
/// ```
pub type DomainResult<T> = Result<T, DomainError>;
