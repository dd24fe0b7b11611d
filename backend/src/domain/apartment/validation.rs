//! Apartment validation and conversion helpers.

use std::collections::HashSet;

use super::{Apartment, ApartmentDraft, ApartmentValidationError, Room};

impl TryFrom<ApartmentDraft> for Apartment {
    type Error = ApartmentValidationError;

    fn try_from(value: ApartmentDraft) -> Result<Self, Self::Error> {
        if value.rooms.is_empty() {
            return Err(ApartmentValidationError::NoRooms);
        }
        validate_unique_room_names(value.rooms.as_slice())?;

        Ok(Self {
            id: None,
            owner_id: value.owner_id,
            address: value.address,
            rooms: value.rooms,
            description: value.description,
        })
    }
}

fn validate_unique_room_names(rooms: &[Room]) -> Result<(), ApartmentValidationError> {
    let mut names = HashSet::new();
    for room in rooms {
        if !names.insert(room.name()) {
            return Err(ApartmentValidationError::DuplicateRoomName {
                name: room.name().to_owned(),
            });
        }
    }
    Ok(())
}
