//! Event channel fanning events out over a Tokio broadcast channel.

use tokio::sync::broadcast;
use tracing::debug;

use crate::domain::RentalEvent;
use crate::domain::ports::{EventChannel, EventChannelError};

/// Default number of events buffered per subscriber.
pub const DEFAULT_EVENT_BUFFER: usize = 64;

/// Broadcasts every published event to all current subscribers.
///
/// Publishing never waits for subscribers. Events published while nobody is
/// subscribed are dropped, and subscribers that fall more than the buffer
/// size behind observe a lag on their receiver.
#[derive(Debug, Clone)]
pub struct BroadcastEventChannel {
    sender: broadcast::Sender<RentalEvent>,
}

impl BroadcastEventChannel {
    /// Create a channel buffering up to `capacity` events per subscriber.
    ///
    /// A zero capacity is raised to one.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    /// Register a new subscriber that sees events published from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<RentalEvent> {
        self.sender.subscribe()
    }

    /// Number of live subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for BroadcastEventChannel {
    fn default() -> Self {
        Self::new(DEFAULT_EVENT_BUFFER)
    }
}

impl EventChannel for BroadcastEventChannel {
    fn publish(&self, event: RentalEvent) -> Result<(), EventChannelError> {
        let name = event.name();
        match self.sender.send(event) {
            Ok(receivers) => debug!(event = name, receivers, "event broadcast"),
            Err(_) => debug!(event = name, "event dropped: no subscribers"),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for the broadcast channel.

    use chrono::NaiveDate;
    use rstest::{fixture, rstest};
    use uuid::Uuid;

    use super::*;
    use crate::domain::{ApartmentBooked, ApartmentId, OwnerId, Period, TenantId};

    #[fixture]
    fn event() -> RentalEvent {
        let day = NaiveDate::from_ymd_opt(2020, 3, 4).expect("valid date");
        RentalEvent::from(ApartmentBooked::create(
            ApartmentId::from_uuid(Uuid::new_v4()),
            OwnerId::new("1234").expect("valid owner"),
            TenantId::new("137").expect("valid tenant"),
            Period::new(day, day).expect("valid period"),
        ))
    }

    #[rstest]
    #[tokio::test]
    async fn every_subscriber_receives_the_event(event: RentalEvent) {
        let channel = BroadcastEventChannel::default();
        let mut first = channel.subscribe();
        let mut second = channel.subscribe();
        assert_eq!(channel.subscriber_count(), 2);

        channel.publish(event.clone()).expect("publish succeeds");

        assert_eq!(first.recv().await.expect("first receives"), event);
        assert_eq!(second.recv().await.expect("second receives"), event);
    }

    #[rstest]
    fn publishing_without_subscribers_succeeds(event: RentalEvent) {
        let channel = BroadcastEventChannel::new(0);
        assert_eq!(channel.subscriber_count(), 0);
        channel.publish(event).expect("publish succeeds");
    }

    #[rstest]
    #[tokio::test]
    async fn slow_subscribers_observe_lag(event: RentalEvent) {
        let channel = BroadcastEventChannel::new(1);
        let mut receiver = channel.subscribe();

        channel.publish(event.clone()).expect("publish succeeds");
        channel.publish(event).expect("publish succeeds");

        assert!(matches!(
            receiver.recv().await,
            Err(broadcast::error::RecvError::Lagged(1))
        ));
    }
}
