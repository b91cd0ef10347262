use std::sync::Arc;

use models::order_item::{self, NewOrderItem, OrderItemChanges};

use super::repository::OrderItemRepository;
use crate::crud::CrudService;
use crate::errors::ServiceError;
use crate::references::References;

/// CRUD on single order items. The referenced order and product must exist
/// on create, and on update when the reference changes.
pub struct OrderItemService {
    crud: CrudService<order_item::Model, NewOrderItem, OrderItemChanges, dyn OrderItemRepository>,
    refs: References,
}

impl OrderItemService {
    pub fn new(items: Arc<dyn OrderItemRepository>, refs: References) -> Self {
        Self { crud: CrudService::new(items, "order item"), refs }
    }

    pub async fn list(&self) -> Result<Vec<order_item::Model>, ServiceError> { self.crud.list().await }

    pub async fn get(&self, id: i64) -> Result<order_item::Model, ServiceError> { self.crud.get(id).await }

    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> { self.crud.delete(id).await }

    pub async fn create(&self, draft: NewOrderItem) -> Result<order_item::Model, ServiceError> {
        self.refs.require_order(draft.order_id).await?;
        self.refs.require_product(draft.product_id).await?;
        self.crud.create(draft).await
    }

    pub async fn update(&self, id: i64, changes: OrderItemChanges) -> Result<order_item::Model, ServiceError> {
        if let Some(order_id) = changes.order_id {
            self.refs.require_order(order_id).await?;
        }
        if let Some(product_id) = changes.product_id {
            self.refs.require_product(product_id).await?;
        }
        self.crud.update(id, changes).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Services;
    use rust_decimal::Decimal;

    #[tokio::test]
    async fn missing_order_or_product_is_rejected() {
        let s = Services::in_memory(4);
        let err = s
            .order_items
            .create(NewOrderItem { order_id: 1, product_id: 1, quantity: 1, unit_price: Decimal::ONE })
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Validation(m) if m.contains("order 1")));
        assert!(s.order_items.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_with_unknown_product_is_rejected() {
        let s = Services::in_memory(4);
        let err = s
            .order_items
            .update(1, OrderItemChanges { product_id: Some(77), ..Default::default() })
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }
}
