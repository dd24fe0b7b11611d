//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **events**: in-process event channels (recording and broadcast)
//! - **persistence**: apartment repositories, in-memory and PostgreSQL via
//!   Diesel ORM
//!
//! Adapters are thin translators that convert between domain types and
//! infrastructure-specific representations. They contain no business logic.

pub mod events;
pub mod persistence;
