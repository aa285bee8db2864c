//! Doctor repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, ModelTrait, NotSet, QueryOrder, Set,
    TransactionTrait,
};

use super::entities::doctor;
use super::entities::{DoctorActiveModel, DoctorEntity};
use crate::domain::{Doctor, DoctorInput};
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Doctor repository trait for dependency injection.
///
/// Absence is reported through the return value (`None` / `false`), never as
/// an error; errors are reserved for store failures.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait DoctorRepository: Send + Sync {
    /// List every stored doctor, ordered by id
    async fn list(&self) -> AppResult<Vec<Doctor>>;

    /// Insert a doctor; the store assigns the id
    async fn create(&self, input: DoctorInput) -> AppResult<Doctor>;

    /// Overwrite name and specialty of an existing doctor
    async fn update_by_id(&self, id: i32, input: DoctorInput) -> AppResult<Option<Doctor>>;

    /// Permanently remove a doctor, returning whether a row existed
    async fn delete_by_id(&self, id: i32) -> AppResult<bool>;
}

/// Concrete implementation of DoctorRepository
pub struct DoctorStore {
    db: DatabaseConnection,
}

impl DoctorStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl DoctorRepository for DoctorStore {
    async fn list(&self) -> AppResult<Vec<Doctor>> {
        let models = DoctorEntity::find()
            .order_by_asc(doctor::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Doctor::from).collect())
    }

    async fn create(&self, input: DoctorInput) -> AppResult<Doctor> {
        let active_model = DoctorActiveModel {
            id: NotSet,
            name: Set(input.name),
            specialty: Set(input.specialty),
        };

        let model = active_model.insert(&self.db).await?;
        tracing::info!(id = model.id, "Doctor created");

        Ok(Doctor::from(model))
    }

    async fn update_by_id(&self, id: i32, input: DoctorInput) -> AppResult<Option<Doctor>> {
        // Dropping an uncommitted transaction rolls it back
        let txn = self.db.begin().await?;

        let Some(existing) = DoctorEntity::find_by_id(id).one(&txn).await? else {
            tracing::debug!(id, "Doctor not found for update");
            return Ok(None);
        };

        let mut active: DoctorActiveModel = existing.into();
        active.name = Set(input.name);
        active.specialty = Set(input.specialty);

        let model = active.update(&txn).await?;
        txn.commit().await?;
        tracing::info!(id, "Doctor updated");

        Ok(Some(Doctor::from(model)))
    }

    async fn delete_by_id(&self, id: i32) -> AppResult<bool> {
        let txn = self.db.begin().await?;

        let Some(existing) = DoctorEntity::find_by_id(id).one(&txn).await? else {
            tracing::debug!(id, "Doctor not found for delete");
            return Ok(false);
        };

        existing.delete(&txn).await?;
        txn.commit().await?;
        tracing::info!(id, "Doctor deleted");

        Ok(true)
    }
}
