use async_trait::async_trait;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};

use models::order_item::{self, NewOrderItem, OrderItemChanges};

use crate::crud::{CrudRepository, MemoryRepository, SeaOrmRepository};
use crate::errors::ServiceError;

#[async_trait]
pub trait OrderItemRepository: CrudRepository<order_item::Model, NewOrderItem, OrderItemChanges> {
    async fn list_by_order(&self, order_id: i64) -> Result<Vec<order_item::Model>, ServiceError>;
}

#[async_trait]
impl OrderItemRepository for SeaOrmRepository<order_item::Entity> {
    async fn list_by_order(&self, order_id: i64) -> Result<Vec<order_item::Model>, ServiceError> {
        Ok(order_item::Entity::find()
            .filter(order_item::Column::OrderId.eq(order_id))
            .order_by_asc(order_item::Column::Id)
            .all(self.db())
            .await?)
    }
}

#[async_trait]
impl OrderItemRepository for MemoryRepository<order_item::Entity> {
    async fn list_by_order(&self, order_id: i64) -> Result<Vec<order_item::Model>, ServiceError> {
        Ok(self.filter(|i| i.order_id == order_id).await)
    }
}
