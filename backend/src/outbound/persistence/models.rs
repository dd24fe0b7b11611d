//! Internal Diesel row structs for database operations.
//!
//! These types never leave the persistence layer.

use diesel::prelude::*;
use uuid::Uuid;

use super::schema::{apartment_rooms, apartments};

/// Row struct for reading from the apartments table.
///
/// Audit timestamps are maintained by the database and not selected.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = apartments)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ApartmentRow {
    pub id: Uuid,
    pub owner_id: String,
    pub street: String,
    pub postal_code: String,
    pub house_number: String,
    pub apartment_number: String,
    pub city: String,
    pub country: String,
    pub description: String,
}

/// Insertable struct for apartment records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = apartments)]
pub(crate) struct NewApartmentRow<'a> {
    pub id: Uuid,
    pub owner_id: &'a str,
    pub street: &'a str,
    pub postal_code: &'a str,
    pub house_number: &'a str,
    pub apartment_number: &'a str,
    pub city: &'a str,
    pub country: &'a str,
    pub description: &'a str,
}

/// Changeset applied when an existing apartment is saved again.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = apartments)]
pub(crate) struct ApartmentUpdate<'a> {
    pub owner_id: &'a str,
    pub street: &'a str,
    pub postal_code: &'a str,
    pub house_number: &'a str,
    pub apartment_number: &'a str,
    pub city: &'a str,
    pub country: &'a str,
    pub description: &'a str,
}

/// Row struct for reading and writing the apartment_rooms table.
#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = apartment_rooms)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ApartmentRoomRow {
    pub apartment_id: Uuid,
    pub position: i32,
    pub name: String,
    pub size: f64,
}
