//! Bookings produced by rental places.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{ApartmentId, Period};

/// Validation errors raised by booking value constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingValidationError {
    EmptyTenantId,
}

impl fmt::Display for BookingValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTenantId => write!(f, "tenant id must not be empty"),
        }
    }
}

impl std::error::Error for BookingValidationError {}

/// Identifier of the tenant making a booking.
///
/// Tenant ids come from an external identity system, so only emptiness is
/// checked here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TenantId(String);

impl TenantId {
    /// Validate and construct a [`TenantId`].
    pub fn new(id: impl Into<String>) -> Result<Self, BookingValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(BookingValidationError::EmptyTenantId);
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for TenantId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for TenantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<TenantId> for String {
    fn from(value: TenantId) -> Self {
        value.0
    }
}

impl TryFrom<String> for TenantId {
    type Error = BookingValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Kind of place a booking refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RentalType {
    Apartment,
}

/// A confirmed stay of a tenant at a rental place.
///
/// Bookings are plain values: they are handed back to the caller and never
/// change after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    rental_type: RentalType,
    rental_place_id: ApartmentId,
    tenant_id: TenantId,
    period: Period,
}

impl Booking {
    /// Booking of a whole apartment.
    pub fn apartment(apartment_id: ApartmentId, tenant_id: TenantId, period: Period) -> Self {
        Self {
            rental_type: RentalType::Apartment,
            rental_place_id: apartment_id,
            tenant_id,
            period,
        }
    }

    pub fn rental_type(&self) -> RentalType {
        self.rental_type
    }

    /// Identifier of the booked place.
    pub fn rental_place_id(&self) -> &ApartmentId {
        &self.rental_place_id
    }

    pub fn tenant_id(&self) -> &TenantId {
        &self.tenant_id
    }

    pub fn period(&self) -> &Period {
        &self.period
    }

    /// Whether the stay covers `date`.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.period.contains(date)
    }

    /// Whether the stay covers every one of `dates`.
    pub fn contains_all_days<I>(&self, dates: I) -> bool
    where
        I: IntoIterator<Item = NaiveDate>,
    {
        dates.into_iter().all(|date| self.contains(date))
    }

    /// Every day of the stay in ascending order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + use<> {
        self.period.days()
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for booking values.

    use super::*;
    use rstest::{fixture, rstest};
    use uuid::Uuid;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2020, 3, day).expect("valid date")
    }

    #[fixture]
    fn booking() -> Booking {
        Booking::apartment(
            ApartmentId::from_uuid(Uuid::new_v4()),
            TenantId::new("137").expect("valid tenant id"),
            Period::new(date(4), date(6)).expect("valid period"),
        )
    }

    #[rstest]
    fn apartment_booking_is_tagged(booking: Booking) {
        assert_eq!(booking.rental_type(), RentalType::Apartment);
        assert_eq!(booking.tenant_id().as_ref(), "137");
    }

    #[rstest]
    fn contains_all_days_of_the_stay(booking: Booking) {
        assert!(booking.contains_all_days([date(4), date(5), date(6)]));
        assert_eq!(booking.days().count(), 3);
    }

    #[rstest]
    #[case(date(3))]
    #[case(date(7))]
    fn days_outside_the_stay_are_not_contained(booking: Booking, #[case] day: NaiveDate) {
        assert!(!booking.contains(day));
        assert!(!booking.contains_all_days([date(5), day]));
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn tenant_id_rejects_blank_values(#[case] raw: &str) {
        assert_eq!(
            TenantId::new(raw),
            Err(BookingValidationError::EmptyTenantId)
        );
    }

    #[rstest]
    fn tenant_id_deserialisation_is_validated() {
        let result = serde_json::from_str::<TenantId>("\"\"");
        assert!(result.is_err());
    }
}
