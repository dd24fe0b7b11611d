//! Apartment repository held entirely in process memory.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::ports::{ApartmentRepository, ApartmentRepositoryError};
use crate::domain::{Apartment, ApartmentId};

/// Stores apartments in a map keyed by id.
///
/// Saving an apartment without an id stores a copy carrying a freshly
/// generated id; saving one that already has an id replaces the stored copy.
#[derive(Debug, Default)]
pub struct InMemoryApartmentRepository {
    apartments: Mutex<HashMap<ApartmentId, Apartment>>,
}

impl InMemoryApartmentRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored apartments.
    ///
    /// A poisoned lock still reports the stored count.
    pub fn len(&self) -> usize {
        self.apartments
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether no apartment has been stored yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned() -> ApartmentRepositoryError {
    ApartmentRepositoryError::connection("in-memory store poisoned")
}

#[async_trait]
impl ApartmentRepository for InMemoryApartmentRepository {
    async fn save(&self, apartment: &Apartment) -> Result<ApartmentId, ApartmentRepositoryError> {
        let stored = match apartment.id() {
            Some(_) => apartment.clone(),
            None => apartment
                .clone()
                .assign_id(ApartmentId::from_uuid(Uuid::new_v4()))
                .map_err(|err| ApartmentRepositoryError::query(err.to_string()))?,
        };
        let id = stored
            .id()
            .copied()
            .ok_or_else(|| ApartmentRepositoryError::query("apartment id missing after save"))?;

        self.apartments
            .lock()
            .map_err(|_| poisoned())?
            .insert(id, stored);
        Ok(id)
    }

    async fn find_by_id(
        &self,
        id: &ApartmentId,
    ) -> Result<Option<Apartment>, ApartmentRepositoryError> {
        Ok(self
            .apartments
            .lock()
            .map_err(|_| poisoned())?
            .get(id)
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::*;

    #[fixture]
    fn apartment() -> Apartment {
        Apartment::builder()
            .with_owner_id("1234")
            .with_street("Florianska")
            .with_postal_code("12-345")
            .with_house_number("1")
            .with_apartment_number("13")
            .with_city("Cracow")
            .with_country("Poland")
            .with_description("Nice place to stay")
            .with_room("Toilet", 10.0)
            .with_room("Bedroom", 30.0)
            .build()
            .expect("valid apartment")
    }

    #[rstest]
    #[tokio::test]
    async fn save_assigns_id_and_find_returns_copy(apartment: Apartment) {
        let repo = InMemoryApartmentRepository::new();

        let id = repo.save(&apartment).await.expect("save succeeds");
        let found = repo
            .find_by_id(&id)
            .await
            .expect("lookup succeeds")
            .expect("apartment stored");

        assert_eq!(found.id(), Some(&id));
        assert_eq!(found.rooms(), apartment.rooms());
        assert_eq!(found.description(), "Nice place to stay");
        assert_eq!(repo.len(), 1);
    }

    #[rstest]
    #[tokio::test]
    async fn saving_new_apartments_generates_distinct_ids(apartment: Apartment) {
        let repo = InMemoryApartmentRepository::new();

        let first = repo.save(&apartment).await.expect("first save");
        let second = repo.save(&apartment).await.expect("second save");

        assert_ne!(first, second);
        assert_eq!(repo.len(), 2);
    }

    #[rstest]
    #[tokio::test]
    async fn saving_persisted_apartment_replaces_it(apartment: Apartment) {
        let repo = InMemoryApartmentRepository::new();
        let id = ApartmentId::from_uuid(Uuid::new_v4());
        let persisted = apartment.assign_id(id).expect("first assignment");

        let saved = repo.save(&persisted).await.expect("first save");
        let saved_again = repo.save(&persisted).await.expect("second save");

        assert_eq!(saved, id);
        assert_eq!(saved_again, id);
        assert_eq!(repo.len(), 1);
    }

    #[rstest]
    #[tokio::test]
    async fn len_survives_a_poisoned_lock(apartment: Apartment) {
        let repo = InMemoryApartmentRepository::new();
        repo.save(&apartment).await.expect("save succeeds");

        let panicked = std::thread::scope(|scope| {
            scope
                .spawn(|| {
                    let _guard = repo.apartments.lock().expect("lock is healthy");
                    panic!("poison the store");
                })
                .join()
                .is_err()
        });

        assert!(panicked);
        assert!(repo.apartments.is_poisoned());
        assert_eq!(repo.len(), 1);
        assert!(!repo.is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn unknown_id_is_not_found() {
        let repo = InMemoryApartmentRepository::new();
        let found = repo
            .find_by_id(&ApartmentId::from_uuid(Uuid::new_v4()))
            .await
            .expect("lookup succeeds");

        assert!(found.is_none());
        assert!(repo.is_empty());
    }
}
