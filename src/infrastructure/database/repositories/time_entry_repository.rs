use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, NotSet, QueryOrder, Set};

use crate::domain::{
    CreateTimeEntryDto, DomainError, DomainResult, TimeEntry, TimeEntryRepositoryInterface,
};
use crate::infrastructure::database::entities::time_entry;

pub struct SeaOrmTimeEntryRepository {
    db: DatabaseConnection,
}

impl SeaOrmTimeEntryRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn model_to_domain(model: time_entry::Model) -> TimeEntry {
    TimeEntry {
        id: model.id,
        user_id: model.user_id,
        description: model.description,
        start_time: model.start_time,
        end_time: model.end_time,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Database(e.to_string())
}

#[async_trait]
impl TimeEntryRepositoryInterface for SeaOrmTimeEntryRepository {
    async fn create_time_entry(&self, dto: CreateTimeEntryDto) -> DomainResult<TimeEntry> {
        dto.check()?;

        let now = Utc::now();
        let entry = time_entry::ActiveModel {
            id: NotSet,
            user_id: Set(dto.user_id),
            description: Set(dto.description),
            start_time: Set(dto.start_time),
            end_time: Set(dto.end_time),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = entry.insert(&self.db).await.map_err(db_err)?;
        Ok(model_to_domain(model))
    }

    async fn find_all(&self) -> DomainResult<Vec<TimeEntry>> {
        let models = time_entry::Entity::find()
            .order_by_asc(time_entry::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        Ok(models.into_iter().map(model_to_domain).collect())
    }
}
