//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod apartment_command;
mod apartment_repository;
mod event_channel;

pub use apartment_command::{
    AddApartmentRequest, AddApartmentResponse, ApartmentCommand, BookApartmentRequest,
    BookApartmentResponse,
};
#[cfg(test)]
pub use apartment_repository::MockApartmentRepository;
pub use apartment_repository::{
    ApartmentRepository, ApartmentRepositoryError, FixtureApartmentRepository,
};
#[cfg(test)]
pub use event_channel::MockEventChannel;
pub use event_channel::{EventChannel, EventChannelError, FixtureEventChannel};
