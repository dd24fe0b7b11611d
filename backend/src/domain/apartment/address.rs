//! Postal address of an apartment.

use super::ApartmentValidationError;

/// Input payload for [`Address::new`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressDraft {
    pub street: String,
    pub postal_code: String,
    pub house_number: String,
    pub apartment_number: String,
    pub city: String,
    pub country: String,
}

/// Immutable postal address.
///
/// ## Invariants
/// - Every field is non-blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    street: String,
    postal_code: String,
    house_number: String,
    apartment_number: String,
    city: String,
    country: String,
}

impl Address {
    /// Validate every field and build the address.
    pub fn new(draft: AddressDraft) -> Result<Self, ApartmentValidationError> {
        let AddressDraft {
            street,
            postal_code,
            house_number,
            apartment_number,
            city,
            country,
        } = draft;

        Ok(Self {
            street: required("street", street)?,
            postal_code: required("postal_code", postal_code)?,
            house_number: required("house_number", house_number)?,
            apartment_number: required("apartment_number", apartment_number)?,
            city: required("city", city)?,
            country: required("country", country)?,
        })
    }

    pub fn street(&self) -> &str {
        self.street.as_str()
    }

    pub fn postal_code(&self) -> &str {
        self.postal_code.as_str()
    }

    pub fn house_number(&self) -> &str {
        self.house_number.as_str()
    }

    pub fn apartment_number(&self) -> &str {
        self.apartment_number.as_str()
    }

    pub fn city(&self) -> &str {
        self.city.as_str()
    }

    pub fn country(&self) -> &str {
        self.country.as_str()
    }
}

fn required(field: &'static str, value: String) -> Result<String, ApartmentValidationError> {
    if value.trim().is_empty() {
        return Err(ApartmentValidationError::MissingAddressField { field });
    }
    Ok(value)
}
