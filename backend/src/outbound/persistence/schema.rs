//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly.

diesel::table! {
    /// One row per apartment; the address is embedded as columns.
    apartments (id) {
        id -> Uuid,
        owner_id -> Varchar,
        street -> Varchar,
        postal_code -> Varchar,
        house_number -> Varchar,
        apartment_number -> Varchar,
        city -> Varchar,
        country -> Varchar,
        description -> Text,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Rooms of an apartment, ordered by `position`.
    apartment_rooms (apartment_id, position) {
        apartment_id -> Uuid,
        position -> Int4,
        name -> Varchar,
        size -> Float8,
    }
}

diesel::joinable!(apartment_rooms -> apartments (apartment_id));
diesel::allow_tables_to_appear_in_same_query!(apartments, apartment_rooms);
