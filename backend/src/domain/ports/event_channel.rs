//! Port through which domain events leave the domain.
//!
//! Publishing is a synchronous call with a declared result. Ordering,
//! durability, and redelivery are the adapter's business.

use crate::domain::RentalEvent;

use super::define_port_error;

define_port_error! {
    /// Errors raised by event channel adapters.
    pub enum EventChannelError {
        /// The channel no longer accepts events.
        Closed { message: String } => "event channel closed: {message}",
        /// The channel refused this particular event.
        Rejected { message: String } => "event channel rejected event: {message}",
    }
}

/// Port for publishing domain events.
#[cfg_attr(test, mockall::automock)]
pub trait EventChannel: Send + Sync {
    /// Hand `event` to the channel.
    fn publish(&self, event: RentalEvent) -> Result<(), EventChannelError>;
}

/// Fixture implementation that accepts and discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureEventChannel;

impl EventChannel for FixtureEventChannel {
    fn publish(&self, _event: RentalEvent) -> Result<(), EventChannelError> {
        Ok(())
    }
}
