use std::sync::Arc;

use tracing::{info, instrument};

use models::order::{self, NewOrder, OrderChanges};
use models::order_item::{self, NewOrderItem};
use models::traits::Validate;

use super::domain::{CreateOrderInput, OrderDetails};
use super::repository::OrderRepository;
use crate::crud::CrudService;
use crate::errors::ServiceError;
use crate::order_item::OrderItemRepository;
use crate::references::References;

pub struct OrderService {
    crud: CrudService<order::Model, NewOrder, OrderChanges, dyn OrderRepository>,
    items: Arc<dyn OrderItemRepository>,
    refs: References,
}

impl OrderService {
    pub fn new(
        orders: Arc<dyn OrderRepository>,
        items: Arc<dyn OrderItemRepository>,
        refs: References,
    ) -> Self {
        Self { crud: CrudService::new(orders, "order"), items, refs }
    }

    pub async fn list(&self) -> Result<Vec<order::Model>, ServiceError> { self.crud.list().await }

    pub async fn get(&self, id: i64) -> Result<order::Model, ServiceError> { self.crud.get(id).await }

    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> { self.crud.delete(id).await }

    pub async fn update(&self, id: i64, changes: OrderChanges) -> Result<order::Model, ServiceError> {
        if let Some(user_id) = changes.user_id {
            self.refs.require_user(user_id).await?;
        }
        self.crud.update(id, changes).await
    }

    /// Place an order: header first, then one write per item.
    ///
    /// The writes are not wrapped in a transaction; if an item write fails the
    /// order and the items written so far stay in place.
    #[instrument(skip(self, input), fields(user_id = input.user_id, lines = input.items.len()))]
    pub async fn create(&self, input: CreateOrderInput) -> Result<OrderDetails, ServiceError> {
        for line in &input.items {
            NewOrderItem { order_id: 0, product_id: line.product_id, quantity: line.quantity, unit_price: line.unit_price }
                .validate()?;
        }
        self.refs.require_user(input.user_id).await?;
        for line in &input.items {
            self.refs.require_product(line.product_id).await?;
        }

        let total = input.total();
        let created = self
            .crud
            .create(NewOrder {
                user_id: input.user_id,
                order_date: input.order_date,
                total_amount: total,
                status: input.status,
                shipping_address: input.shipping_address,
                payment_method: input.payment_method,
            })
            .await?;

        let mut items: Vec<order_item::Model> = Vec::with_capacity(input.items.len());
        for line in input.items {
            let item = self
                .items
                .insert(NewOrderItem {
                    order_id: created.id,
                    product_id: line.product_id,
                    quantity: line.quantity,
                    unit_price: line.unit_price,
                })
                .await?;
            items.push(item);
        }

        info!(order_id = created.id, total = %total, "order_placed");
        Ok(OrderDetails { order: created, items })
    }

    /// Orders of one user; the user must exist.
    pub async fn list_by_user(&self, user_id: i64) -> Result<Vec<order::Model>, ServiceError> {
        if !self.refs.has_user(user_id).await? {
            return Err(ServiceError::not_found("user", user_id));
        }
        self.crud.repo().list_by_user(user_id).await
    }

    pub async fn items(&self, order_id: i64) -> Result<Vec<order_item::Model>, ServiceError> {
        self.crud.get(order_id).await?;
        self.items.list_by_order(order_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::domain::OrderLineInput;
    use crate::registry::Services;
    use crate::user::domain::CreateUserInput;
    use models::product::NewProduct;
    use rust_decimal::Decimal;

    async fn fixture() -> (Services, i64, i64) {
        let services = Services::in_memory(4);
        let user = services
            .users
            .create(CreateUserInput {
                full_name: "Order Tester".into(),
                email: "orders@example.com".into(),
                password: "pw123456".into(),
                phone_number: None,
                address: None,
                role: None,
                profile_image_url: None,
            })
            .await
            .unwrap();
        let product = services
            .products
            .create(NewProduct {
                category_id: None,
                name: "Brake pads".into(),
                description: None,
                price: Decimal::new(4500, 2),
                stock_quantity: Some(10),
                image_url: None,
                brand: None,
                model_year: None,
                engine_cc: None,
                color: None,
                condition_status: None,
            })
            .await
            .unwrap();
        (services, user.id, product.id)
    }

    fn input(user_id: i64, items: Vec<OrderLineInput>) -> CreateOrderInput {
        CreateOrderInput {
            user_id,
            order_date: None,
            status: None,
            shipping_address: "Calle Mayor 3".into(),
            payment_method: Some("cash".into()),
            items,
        }
    }

    fn line(product_id: i64, quantity: i32, cents: i64) -> OrderLineInput {
        OrderLineInput { product_id, quantity, unit_price: Decimal::new(cents, 2) }
    }

    #[tokio::test]
    async fn total_is_sum_of_lines() {
        let (s, uid, pid) = fixture().await;
        let placed = s.orders.create(input(uid, vec![line(pid, 2, 4500), line(pid, 1, 1250)])).await.unwrap();
        assert_eq!(placed.order.total_amount, Decimal::new(10250, 2));
        assert_eq!(placed.order.status, order::DEFAULT_STATUS);
        assert_eq!(placed.items.len(), 2);
        assert!(placed.items.iter().all(|i| i.order_id == placed.order.id));

        let stored = s.orders.items(placed.order.id).await.unwrap();
        assert_eq!(stored, placed.items);
    }

    #[tokio::test]
    async fn unknown_user_is_rejected_before_writing() {
        let (s, _, pid) = fixture().await;
        let err = s.orders.create(input(999, vec![line(pid, 1, 100)])).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
        assert!(s.orders.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn zero_quantity_line_is_rejected() {
        let (s, uid, pid) = fixture().await;
        let err = s.orders.create(input(uid, vec![line(pid, 0, 100)])).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[tokio::test]
    async fn list_by_user_filters_and_requires_user() {
        let (s, uid, pid) = fixture().await;
        s.orders.create(input(uid, vec![line(pid, 1, 100)])).await.unwrap();
        assert_eq!(s.orders.list_by_user(uid).await.unwrap().len(), 1);
        assert!(matches!(s.orders.list_by_user(404).await, Err(ServiceError::NotFound(_))));
    }
}
