//! PostgreSQL-backed `ApartmentRepository` implementation using Diesel ORM.
//!
//! An apartment is stored as one `apartments` row plus one `apartment_rooms`
//! row per room. Rows are converted back through the validated domain
//! constructors, so a corrupted row surfaces as a query error rather than an
//! invalid aggregate.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::AsyncConnection as _;
use diesel_async::RunQueryDsl;
use diesel_async::scoped_futures::ScopedFutureExt as _;
use uuid::Uuid;

use crate::domain::ports::{ApartmentRepository, ApartmentRepositoryError};
use crate::domain::{
    Address, AddressDraft, Apartment, ApartmentDraft, ApartmentId, OwnerId, Room, SquareMeter,
};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{ApartmentRoomRow, ApartmentRow, ApartmentUpdate, NewApartmentRow};
use super::pool::{DbPool, PoolError};
use super::schema::{apartment_rooms, apartments};

/// Diesel-backed implementation of the apartment repository port.
#[derive(Clone)]
pub struct DieselApartmentRepository {
    pool: DbPool,
}

impl DieselApartmentRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> ApartmentRepositoryError {
    map_basic_pool_error(error, |message| {
        ApartmentRepositoryError::connection(message)
    })
}

fn map_diesel_error(error: diesel::result::Error) -> ApartmentRepositoryError {
    map_basic_diesel_error(
        error,
        ApartmentRepositoryError::query,
        ApartmentRepositoryError::connection,
    )
}

fn room_rows(
    apartment_id: ApartmentId,
    apartment: &Apartment,
) -> Result<Vec<ApartmentRoomRow>, ApartmentRepositoryError> {
    apartment
        .rooms()
        .iter()
        .enumerate()
        .map(|(index, room)| {
            let position = i32::try_from(index).map_err(|_| {
                ApartmentRepositoryError::query(format!("room position {index} out of range"))
            })?;
            Ok(ApartmentRoomRow {
                apartment_id: *apartment_id.as_uuid(),
                position,
                name: room.name().to_owned(),
                size: room.size().value(),
            })
        })
        .collect()
}

/// Convert stored rows into a validated, persisted apartment.
fn rows_to_apartment(
    row: ApartmentRow,
    room_rows: Vec<ApartmentRoomRow>,
) -> Result<Apartment, ApartmentRepositoryError> {
    let ApartmentRow {
        id,
        owner_id,
        street,
        postal_code,
        house_number,
        apartment_number,
        city,
        country,
        description,
    } = row;

    let invalid = |err: crate::domain::ApartmentValidationError| {
        ApartmentRepositoryError::query(format!("stored apartment {id} is invalid: {err}"))
    };

    let rooms = room_rows
        .into_iter()
        .map(|room| Room::new(room.name, SquareMeter::new(room.size)?))
        .collect::<Result<Vec<_>, _>>()
        .map_err(invalid)?;

    let draft = ApartmentDraft {
        owner_id: OwnerId::new(owner_id).map_err(invalid)?,
        address: Address::new(AddressDraft {
            street,
            postal_code,
            house_number,
            apartment_number,
            city,
            country,
        })
        .map_err(invalid)?,
        rooms,
        description,
    };

    Apartment::restore(ApartmentId::from_uuid(id), draft).map_err(invalid)
}

#[async_trait]
impl ApartmentRepository for DieselApartmentRepository {
    async fn save(&self, apartment: &Apartment) -> Result<ApartmentId, ApartmentRepositoryError> {
        let apartment_id = apartment
            .id()
            .copied()
            .unwrap_or_else(|| ApartmentId::from_uuid(Uuid::new_v4()));
        let rooms = room_rows(apartment_id, apartment)?;
        let address = apartment.address();

        let new_row = NewApartmentRow {
            id: *apartment_id.as_uuid(),
            owner_id: apartment.owner_id().as_ref(),
            street: address.street(),
            postal_code: address.postal_code(),
            house_number: address.house_number(),
            apartment_number: address.apartment_number(),
            city: address.city(),
            country: address.country(),
            description: apartment.description(),
        };
        let update_row = ApartmentUpdate {
            owner_id: new_row.owner_id,
            street: new_row.street,
            postal_code: new_row.postal_code,
            house_number: new_row.house_number,
            apartment_number: new_row.apartment_number,
            city: new_row.city,
            country: new_row.country,
            description: new_row.description,
        };

        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        conn.transaction(|conn| {
            async move {
                diesel::insert_into(apartments::table)
                    .values(&new_row)
                    .on_conflict(apartments::id)
                    .do_update()
                    .set(&update_row)
                    .execute(conn)
                    .await?;

                diesel::delete(
                    apartment_rooms::table
                        .filter(apartment_rooms::apartment_id.eq(apartment_id.as_uuid())),
                )
                .execute(conn)
                .await?;

                diesel::insert_into(apartment_rooms::table)
                    .values(&rooms)
                    .execute(conn)
                    .await?;

                Ok(())
            }
            .scope_boxed()
        })
        .await
        .map_err(map_diesel_error)?;

        Ok(apartment_id)
    }

    async fn find_by_id(
        &self,
        id: &ApartmentId,
    ) -> Result<Option<Apartment>, ApartmentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = apartments::table
            .filter(apartments::id.eq(id.as_uuid()))
            .select(ApartmentRow::as_select())
            .first::<ApartmentRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        let Some(row) = row else {
            return Ok(None);
        };

        let rooms: Vec<ApartmentRoomRow> = apartment_rooms::table
            .filter(apartment_rooms::apartment_id.eq(id.as_uuid()))
            .order(apartment_rooms::position.asc())
            .select(ApartmentRoomRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows_to_apartment(row, rooms).map(Some)
    }
}
