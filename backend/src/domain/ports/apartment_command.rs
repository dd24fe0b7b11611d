//! Driving port for apartment mutations.
//!
//! Requests carry flat, unvalidated fields as an inbound adapter would
//! receive them; the service turns them into domain values.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{ApartmentId, Booking, DomainError, RoomsDefinition};

/// Request to register a new apartment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddApartmentRequest {
    pub owner_id: String,
    pub street: String,
    pub postal_code: String,
    pub house_number: String,
    pub apartment_number: String,
    pub city: String,
    pub country: String,
    #[serde(default)]
    pub description: String,
    pub rooms_definition: RoomsDefinition,
}

/// Response payload for a registered apartment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddApartmentResponse {
    pub apartment_id: ApartmentId,
}

/// Request to book an apartment for a tenant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookApartmentRequest {
    pub apartment_id: String,
    pub tenant_id: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// Response payload carrying the created booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookApartmentResponse {
    pub booking: Booking,
}

/// Domain use-case port for registering and booking apartments.
#[async_trait]
pub trait ApartmentCommand: Send + Sync {
    /// Register an apartment and return its generated id.
    async fn add(&self, request: AddApartmentRequest) -> Result<AddApartmentResponse, DomainError>;

    /// Book a stored apartment and publish the resulting event.
    async fn book(
        &self,
        request: BookApartmentRequest,
    ) -> Result<BookApartmentResponse, DomainError>;
}
