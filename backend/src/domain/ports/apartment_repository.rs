//! Port for apartment persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Apartment, ApartmentId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by apartment repository adapters.
    pub enum ApartmentRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "apartment repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "apartment repository query failed: {message}",
    }
}

/// Port for storing and loading apartments.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ApartmentRepository: Send + Sync {
    /// Persist an apartment and return its identifier.
    ///
    /// Adapters generate an id for apartments that have none and overwrite
    /// the stored aggregate otherwise.
    async fn save(&self, apartment: &Apartment) -> Result<ApartmentId, ApartmentRepositoryError>;

    /// Find an apartment by id.
    async fn find_by_id(
        &self,
        id: &ApartmentId,
    ) -> Result<Option<Apartment>, ApartmentRepositoryError>;
}

/// Fixture implementation for tests that do not exercise persistence.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureApartmentRepository;

#[async_trait]
impl ApartmentRepository for FixtureApartmentRepository {
    async fn save(&self, apartment: &Apartment) -> Result<ApartmentId, ApartmentRepositoryError> {
        Ok(apartment
            .id()
            .copied()
            .unwrap_or_else(|| ApartmentId::from_uuid(Uuid::new_v4())))
    }

    async fn find_by_id(
        &self,
        _id: &ApartmentId,
    ) -> Result<Option<Apartment>, ApartmentRepositoryError> {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

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
            .with_room("Bedroom", 30.0)
            .build()
            .expect("valid apartment")
    }

    #[rstest]
    #[tokio::test]
    async fn fixture_save_generates_id_for_new_apartment(apartment: Apartment) {
        let repo = FixtureApartmentRepository;
        let id = repo.save(&apartment).await.expect("fixture save succeeds");
        assert!(!id.as_uuid().is_nil());
    }

    #[rstest]
    #[tokio::test]
    async fn fixture_save_keeps_existing_id(apartment: Apartment) {
        let id = ApartmentId::from_uuid(Uuid::new_v4());
        let persisted = apartment.assign_id(id).expect("first assignment");

        let saved = FixtureApartmentRepository
            .save(&persisted)
            .await
            .expect("fixture save succeeds");
        assert_eq!(saved, id);
    }

    #[rstest]
    #[tokio::test]
    async fn fixture_find_returns_none() {
        let found = FixtureApartmentRepository
            .find_by_id(&ApartmentId::from_uuid(Uuid::new_v4()))
            .await
            .expect("fixture lookup succeeds");
        assert!(found.is_none());
    }

    #[rstest]
    fn connection_error_formats_message() {
        let err = ApartmentRepositoryError::connection("pool exhausted");
        assert!(err.to_string().contains("pool exhausted"));
    }
}
