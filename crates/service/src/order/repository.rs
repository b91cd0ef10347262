use async_trait::async_trait;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};

use models::order::{self, NewOrder, OrderChanges};

use crate::crud::{CrudRepository, MemoryRepository, SeaOrmRepository};
use crate::errors::ServiceError;

#[async_trait]
pub trait OrderRepository: CrudRepository<order::Model, NewOrder, OrderChanges> {
    async fn list_by_user(&self, user_id: i64) -> Result<Vec<order::Model>, ServiceError>;
}

#[async_trait]
impl OrderRepository for SeaOrmRepository<order::Entity> {
    async fn list_by_user(&self, user_id: i64) -> Result<Vec<order::Model>, ServiceError> {
        Ok(order::Entity::find()
            .filter(order::Column::UserId.eq(user_id))
            .order_by_asc(order::Column::Id)
            .all(self.db())
            .await?)
    }
}

#[async_trait]
impl OrderRepository for MemoryRepository<order::Entity> {
    async fn list_by_user(&self, user_id: i64) -> Result<Vec<order::Model>, ServiceError> {
        Ok(self.filter(|o| o.user_id == user_id).await)
    }
}
