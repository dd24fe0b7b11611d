//! Event channel that records published events in memory.

use std::sync::{Mutex, PoisonError};

use tracing::debug;

use crate::domain::RentalEvent;
use crate::domain::ports::{EventChannel, EventChannelError};

/// Records every published event, in publish order.
///
/// Useful for wiring services in tests and local tooling. A failure can be
/// queued with [`InMemoryEventChannel::fail_next`] to exercise error paths.
#[derive(Debug, Default)]
pub struct InMemoryEventChannel {
    events: Mutex<Vec<RentalEvent>>,
    pending_failure: Mutex<Option<EventChannelError>>,
}

impl InMemoryEventChannel {
    /// Create an empty channel.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events published so far.
    pub fn published(&self) -> Vec<RentalEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Drain the recorded events.
    pub fn take(&self) -> Vec<RentalEvent> {
        std::mem::take(&mut *self.events.lock().unwrap_or_else(PoisonError::into_inner))
    }

    /// Make the next publish fail with `error` instead of recording.
    pub fn fail_next(&self, error: EventChannelError) {
        *self
            .pending_failure
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(error);
    }
}

impl EventChannel for InMemoryEventChannel {
    fn publish(&self, event: RentalEvent) -> Result<(), EventChannelError> {
        let pending = self
            .pending_failure
            .lock()
            .map_err(|_| EventChannelError::closed("failure switch poisoned"))?
            .take();
        if let Some(error) = pending {
            return Err(error);
        }

        debug!(event = event.name(), "recording event");
        self.events
            .lock()
            .map_err(|_| EventChannelError::closed("event log poisoned"))?
            .push(event);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for the recording channel.

    use chrono::NaiveDate;
    use rstest::{fixture, rstest};
    use uuid::Uuid;

    use super::*;
    use crate::domain::{ApartmentBooked, ApartmentId, OwnerId, Period, TenantId};

    #[fixture]
    fn event() -> RentalEvent {
        let start = NaiveDate::from_ymd_opt(2020, 3, 4).expect("valid date");
        let end = NaiveDate::from_ymd_opt(2020, 3, 6).expect("valid date");
        RentalEvent::from(ApartmentBooked::create(
            ApartmentId::from_uuid(Uuid::new_v4()),
            OwnerId::new("1234").expect("valid owner"),
            TenantId::new("137").expect("valid tenant"),
            Period::new(start, end).expect("valid period"),
        ))
    }

    #[rstest]
    fn records_events_in_publish_order(event: RentalEvent) {
        let channel = InMemoryEventChannel::new();
        channel.publish(event.clone()).expect("publish succeeds");
        channel.publish(event.clone()).expect("publish succeeds");

        assert_eq!(channel.published(), vec![event.clone(), event]);
    }

    #[rstest]
    fn take_drains_recorded_events(event: RentalEvent) {
        let channel = InMemoryEventChannel::new();
        channel.publish(event).expect("publish succeeds");

        assert_eq!(channel.take().len(), 1);
        assert!(channel.published().is_empty());
    }

    #[rstest]
    fn fail_next_applies_to_a_single_publish(event: RentalEvent) {
        let channel = InMemoryEventChannel::new();
        channel.fail_next(EventChannelError::rejected("maintenance"));

        let first = channel.publish(event.clone());
        assert_eq!(first, Err(EventChannelError::rejected("maintenance")));
        assert!(channel.published().is_empty());

        channel.publish(event).expect("second publish succeeds");
        assert_eq!(channel.published().len(), 1);
    }
}
