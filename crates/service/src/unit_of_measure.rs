//! Unit-of-measure reference data. Read-only in this layer; rows come from
//! the seed migration.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait};

use models::unit_of_measure;

use crate::data::UnitOfMeasureDto;
use crate::errors::ServiceError;

#[async_trait]
pub trait UnitOfMeasureRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<unit_of_measure::Model>, ServiceError>;
    async fn find_by_id(&self, id: i64)
        -> Result<Option<unit_of_measure::Model>, ServiceError>;
}

pub struct SeaOrmUnitOfMeasureRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl UnitOfMeasureRepository for SeaOrmUnitOfMeasureRepository {
    async fn find_all(&self) -> Result<Vec<unit_of_measure::Model>, ServiceError> {
        unit_of_measure::Entity::find()
            .all(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn find_by_id(
        &self,
        id: i64,
    ) -> Result<Option<unit_of_measure::Model>, ServiceError> {
        unit_of_measure::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }
}

pub struct UnitOfMeasureService {
    repo: Arc<dyn UnitOfMeasureRepository>,
}

impl UnitOfMeasureService {
    pub fn new(repo: Arc<dyn UnitOfMeasureRepository>) -> Self {
        Self { repo }
    }

    /// All reference rows, for populating selection lists.
    pub async fn get_all(&self) -> Result<Vec<UnitOfMeasureDto>, ServiceError> {
        let units = self.repo.find_all().await?;
        Ok(units.into_iter().map(UnitOfMeasureDto::from).collect())
    }
}
