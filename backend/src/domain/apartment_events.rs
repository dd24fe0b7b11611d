//! Domain events emitted by rental places.
//!
//! Events carry only primitive and value fields so channel adapters can
//! forward them (in-process, JSON, message bus) without touching domain
//! logic.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{ApartmentId, OwnerId, Period, TenantId};

/// Event emitted when an apartment has been booked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApartmentBooked {
    apartment_id: ApartmentId,
    owner_id: OwnerId,
    tenant_id: TenantId,
    period_start: NaiveDate,
    period_end: NaiveDate,
}

impl ApartmentBooked {
    /// Snapshot a booking of `apartment_id` by `tenant_id`.
    pub fn create(
        apartment_id: ApartmentId,
        owner_id: OwnerId,
        tenant_id: TenantId,
        period: Period,
    ) -> Self {
        Self {
            apartment_id,
            owner_id,
            tenant_id,
            period_start: period.start(),
            period_end: period.end(),
        }
    }

    pub fn apartment_id(&self) -> &ApartmentId {
        &self.apartment_id
    }

    pub fn owner_id(&self) -> &OwnerId {
        &self.owner_id
    }

    pub fn tenant_id(&self) -> &TenantId {
        &self.tenant_id
    }

    pub fn period_start(&self) -> NaiveDate {
        self.period_start
    }

    pub fn period_end(&self) -> NaiveDate {
        self.period_end
    }
}

/// Every domain event published through an event channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
#[non_exhaustive]
pub enum RentalEvent {
    /// An apartment has been booked.
    ApartmentBooked(ApartmentBooked),
}

impl RentalEvent {
    /// Stable event name for logging and routing.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::ApartmentBooked(_) => "apartment_booked",
        }
    }
}

impl From<ApartmentBooked> for RentalEvent {
    fn from(value: ApartmentBooked) -> Self {
        Self::ApartmentBooked(value)
    }
}
