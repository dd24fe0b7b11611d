//! Fluent assembly of an [`Apartment`] from flat fields.

use indexmap::IndexMap;

use super::{
    Address, AddressDraft, Apartment, ApartmentDraft, ApartmentValidationError, OwnerId, Room,
    SquareMeter,
};

/// Room name to floor area, iterated in insertion order.
pub type RoomsDefinition = IndexMap<String, f64>;

/// Accumulates apartment fields in any order and validates them on
/// [`ApartmentBuilder::build`].
#[derive(Debug, Clone, Default)]
#[must_use]
pub struct ApartmentBuilder {
    owner_id: Option<String>,
    street: Option<String>,
    postal_code: Option<String>,
    house_number: Option<String>,
    apartment_number: Option<String>,
    city: Option<String>,
    country: Option<String>,
    description: Option<String>,
    rooms: Vec<(String, f64)>,
}

impl ApartmentBuilder {
    pub fn with_owner_id(mut self, owner_id: impl Into<String>) -> Self {
        self.owner_id = Some(owner_id.into());
        self
    }

    pub fn with_street(mut self, street: impl Into<String>) -> Self {
        self.street = Some(street.into());
        self
    }

    pub fn with_postal_code(mut self, postal_code: impl Into<String>) -> Self {
        self.postal_code = Some(postal_code.into());
        self
    }

    pub fn with_house_number(mut self, house_number: impl Into<String>) -> Self {
        self.house_number = Some(house_number.into());
        self
    }

    pub fn with_apartment_number(mut self, apartment_number: impl Into<String>) -> Self {
        self.apartment_number = Some(apartment_number.into());
        self
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Replaces any previously defined rooms with `rooms_definition`.
    pub fn with_rooms_definition(mut self, rooms_definition: RoomsDefinition) -> Self {
        self.rooms = rooms_definition.into_iter().collect();
        self
    }

    /// Appends a single room after those already defined.
    pub fn with_room(mut self, name: impl Into<String>, area: f64) -> Self {
        self.rooms.push((name.into(), area));
        self
    }

    /// Validates the accumulated fields and assembles the apartment.
    ///
    /// The description is optional; every other field is required.
    pub fn build(self) -> Result<Apartment, ApartmentValidationError> {
        let Self {
            owner_id,
            street,
            postal_code,
            house_number,
            apartment_number,
            city,
            country,
            description,
            rooms,
        } = self;

        let owner_id = OwnerId::new(owner_id.unwrap_or_default())?;
        let address = Address::new(AddressDraft {
            street: street.unwrap_or_default(),
            postal_code: postal_code.unwrap_or_default(),
            house_number: house_number.unwrap_or_default(),
            apartment_number: apartment_number.unwrap_or_default(),
            city: city.unwrap_or_default(),
            country: country.unwrap_or_default(),
        })?;
        let rooms = rooms
            .into_iter()
            .map(|(name, area)| Room::new(name, SquareMeter::new(area)?))
            .collect::<Result<Vec<_>, _>>()?;

        Apartment::new(ApartmentDraft {
            owner_id,
            address,
            rooms,
            description: description.unwrap_or_default(),
        })
    }
}
