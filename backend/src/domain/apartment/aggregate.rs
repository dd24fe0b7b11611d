//! The apartment aggregate root.

use tracing::debug;

use crate::domain::ports::EventChannel;
use crate::domain::{ApartmentBooked, Booking, Period, RentalEvent, TenantId};

use super::{
    Address, ApartmentBuilder, ApartmentId, ApartmentValidationError, BookingError, OwnerId, Room,
};

/// Input payload for [`Apartment::new`] and [`Apartment::restore`].
#[derive(Debug, Clone)]
pub struct ApartmentDraft {
    pub owner_id: OwnerId,
    pub address: Address,
    pub rooms: Vec<Room>,
    pub description: String,
}

/// A rentable apartment.
///
/// ## Invariants
/// - `rooms` is non-empty and room names are unique.
/// - `id` is absent until a repository saves the apartment, then never
///   changes.
///
/// # Examples
/// ```
/// use rental::domain::Apartment;
///
/// let apartment = Apartment::builder()
///     .with_owner_id("1234")
///     .with_street("Florianska")
///     .with_postal_code("12-345")
///     .with_house_number("1")
///     .with_apartment_number("13")
///     .with_city("Cracow")
///     .with_country("Poland")
///     .with_room("Bedroom", 30.0)
///     .build()?;
/// assert!(apartment.id().is_none());
/// # Ok::<(), rental::domain::ApartmentValidationError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Apartment {
    pub(super) id: Option<ApartmentId>,
    pub(super) owner_id: OwnerId,
    pub(super) address: Address,
    pub(super) rooms: Vec<Room>,
    pub(super) description: String,
}

impl Apartment {
    /// Start assembling an apartment from flat fields.
    pub fn builder() -> ApartmentBuilder {
        ApartmentBuilder::default()
    }

    /// Creates a validated, not yet persisted apartment.
    pub fn new(draft: ApartmentDraft) -> Result<Self, ApartmentValidationError> {
        Self::try_from(draft)
    }

    /// Rehydrates an apartment previously saved under `id`.
    pub fn restore(
        id: ApartmentId,
        draft: ApartmentDraft,
    ) -> Result<Self, ApartmentValidationError> {
        Self::new(draft)?.assign_id(id)
    }

    /// Records the identifier generated by persistence.
    ///
    /// This is the only transition an apartment goes through; assigning a
    /// second id fails.
    pub fn assign_id(mut self, id: ApartmentId) -> Result<Self, ApartmentValidationError> {
        if let Some(existing) = self.id {
            return Err(ApartmentValidationError::IdAlreadyAssigned { id: existing });
        }
        self.id = Some(id);
        Ok(self)
    }

    /// Persisted identifier, absent before the first save.
    pub fn id(&self) -> Option<&ApartmentId> {
        self.id.as_ref()
    }

    pub fn owner_id(&self) -> &OwnerId {
        &self.owner_id
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    /// Rooms in the order they were defined.
    pub fn rooms(&self) -> &[Room] {
        self.rooms.as_slice()
    }

    pub fn description(&self) -> &str {
        self.description.as_str()
    }

    /// Combined floor area of every room.
    pub fn total_area(&self) -> f64 {
        self.rooms.iter().map(|room| room.size().value()).sum()
    }

    /// Books the apartment for `tenant_id` over `period`.
    ///
    /// Exactly one [`ApartmentBooked`] event is published before the booking is
    /// returned. Overlapping bookings are not detected here.
    ///
    /// # Errors
    ///
    /// [`BookingError::ApartmentNotPersisted`] when the apartment has no id yet,
    /// [`BookingError::EventPublishFailed`] when the channel refuses the event.
    pub fn book<C>(
        &self,
        tenant_id: TenantId,
        period: Period,
        event_channel: &C,
    ) -> Result<Booking, BookingError>
    where
        C: EventChannel + ?Sized,
    {
        let apartment_id = self.id.ok_or(BookingError::ApartmentNotPersisted)?;

        let apartment_booked = ApartmentBooked::create(
            apartment_id,
            self.owner_id.clone(),
            tenant_id.clone(),
            period,
        );
        event_channel.publish(RentalEvent::ApartmentBooked(apartment_booked))?;
        debug!(
            apartment_id = %apartment_id,
            tenant_id = %tenant_id,
            period = %period,
            "apartment booked event published"
        );

        Ok(Booking::apartment(apartment_id, tenant_id, period))
    }
}
