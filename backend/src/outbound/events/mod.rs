//! In-process event channel adapters.
//!
//! Both adapters implement the domain `EventChannel` port without leaving the
//! process. Durable or cross-service delivery belongs to a dedicated adapter.

mod broadcast;
mod in_memory;

pub use broadcast::{BroadcastEventChannel, DEFAULT_EVENT_BUFFER};
pub use in_memory::InMemoryEventChannel;
