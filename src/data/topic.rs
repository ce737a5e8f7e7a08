use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait};

use crate::model::topic::CreateTopicBody;

pub struct TopicRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TopicRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<entity::topic::Model>, DbErr> {
        entity::prelude::Topic::find().all(self.db).await
    }

    /// Inserts a new topic. A duplicate slug surfaces as a unique
    /// constraint violation and is classified by the error layer.
    pub async fn insert(&self, params: CreateTopicBody) -> Result<entity::topic::Model, DbErr> {
        entity::topic::ActiveModel {
            slug: ActiveValue::Set(params.slug),
            description: ActiveValue::Set(params.description),
        }
        .insert(self.db)
        .await
    }
}
