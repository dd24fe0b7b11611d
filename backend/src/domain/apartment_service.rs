//! Apartment domain service.
//!
//! Implements the apartment driving port on top of the repository and event
//! channel driven ports.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::{info, warn};

use crate::domain::ports::{
    AddApartmentRequest, AddApartmentResponse, ApartmentCommand, ApartmentRepository,
    ApartmentRepositoryError, BookApartmentRequest, BookApartmentResponse, EventChannel,
};
use crate::domain::{
    Apartment, ApartmentId, ApartmentValidationError, BookingError, DomainError, Period, TenantId,
};

fn map_repository_error(error: ApartmentRepositoryError) -> DomainError {
    match error {
        ApartmentRepositoryError::Connection { message } => {
            DomainError::service_unavailable(format!("apartment repository unavailable: {message}"))
        }
        ApartmentRepositoryError::Query { message } => {
            DomainError::internal(format!("apartment repository error: {message}"))
        }
    }
}

/// Request field an apartment validation failure refers to.
fn offending_field(error: &ApartmentValidationError) -> &'static str {
    match error {
        ApartmentValidationError::InvalidId { .. }
        | ApartmentValidationError::IdAlreadyAssigned { .. } => "apartmentId",
        ApartmentValidationError::EmptyOwnerId => "ownerId",
        ApartmentValidationError::MissingAddressField { field } => match *field {
            "postal_code" => "postalCode",
            "house_number" => "houseNumber",
            "apartment_number" => "apartmentNumber",
            other => other,
        },
        ApartmentValidationError::EmptyRoomName
        | ApartmentValidationError::NonPositiveArea { .. }
        | ApartmentValidationError::NoRooms
        | ApartmentValidationError::DuplicateRoomName { .. } => "roomsDefinition",
    }
}

fn invalid_field(field: &str, message: String) -> DomainError {
    DomainError::invalid_request(message).with_details(json!({ "field": field }))
}

fn map_booking_error(error: &BookingError) -> DomainError {
    match error {
        BookingError::ApartmentNotPersisted => DomainError::internal(error.to_string()),
        BookingError::EventPublishFailed(_) => DomainError::service_unavailable(error.to_string()),
    }
}

/// Apartment service implementing [`ApartmentCommand`].
#[derive(Clone)]
pub struct ApartmentService<R, C> {
    apartment_repo: Arc<R>,
    event_channel: Arc<C>,
}

impl<R, C> ApartmentService<R, C> {
    /// Create a new service with the apartment repository and event channel.
    pub fn new(apartment_repo: Arc<R>, event_channel: Arc<C>) -> Self {
        Self {
            apartment_repo,
            event_channel,
        }
    }
}

#[async_trait]
impl<R, C> ApartmentCommand for ApartmentService<R, C>
where
    R: ApartmentRepository,
    C: EventChannel,
{
    async fn add(&self, request: AddApartmentRequest) -> Result<AddApartmentResponse, DomainError> {
        let AddApartmentRequest {
            owner_id,
            street,
            postal_code,
            house_number,
            apartment_number,
            city,
            country,
            description,
            rooms_definition,
        } = request;

        let apartment = Apartment::builder()
            .with_owner_id(owner_id)
            .with_street(street)
            .with_postal_code(postal_code)
            .with_house_number(house_number)
            .with_apartment_number(apartment_number)
            .with_city(city)
            .with_country(country)
            .with_description(description)
            .with_rooms_definition(rooms_definition)
            .build()
            .map_err(|err| {
                invalid_field(offending_field(&err), format!("invalid apartment: {err}"))
            })?;

        let apartment_id = self
            .apartment_repo
            .save(&apartment)
            .await
            .map_err(map_repository_error)?;
        info!(%apartment_id, owner_id = %apartment.owner_id(), "apartment registered");

        Ok(AddApartmentResponse { apartment_id })
    }

    async fn book(
        &self,
        request: BookApartmentRequest,
    ) -> Result<BookApartmentResponse, DomainError> {
        let apartment_id: ApartmentId = request
            .apartment_id
            .parse()
            .map_err(|err| invalid_field("apartmentId", format!("invalid apartment id: {err}")))?;
        let tenant_id = TenantId::new(request.tenant_id)
            .map_err(|err| invalid_field("tenantId", format!("invalid booking request: {err}")))?;
        let period = Period::new(request.start, request.end)
            .map_err(|err| invalid_field("period", format!("invalid booking request: {err}")))?;

        let apartment = self
            .apartment_repo
            .find_by_id(&apartment_id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| {
                DomainError::not_found(format!("apartment {apartment_id} not found"))
                    .with_details(json!({ "apartmentId": apartment_id }))
            })?;

        let booking = apartment
            .book(tenant_id, period, self.event_channel.as_ref())
            .map_err(|err| {
                warn!(%apartment_id, error = %err, "apartment booking failed");
                map_booking_error(&err)
            })?;

        Ok(BookApartmentResponse { booking })
    }
}

#[cfg(test)]
#[path = "apartment_service_tests.rs"]
mod tests;
