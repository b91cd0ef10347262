//! Existence checks for the foreign keys a write is about to store.
//!
//! A missing parent is a [`ServiceError::Validation`] ("user 7 does not
//! exist"), whichever backend is in use.

use std::sync::Arc;

use crate::entities::{CategoryRepository, ProductRepository, ServiceOfferingRepository};
use crate::errors::ServiceError;
use crate::order::OrderRepository;
use crate::user::UserRepository;

#[derive(Clone)]
pub struct References {
    users: Arc<dyn UserRepository>,
    categories: Arc<CategoryRepository>,
    products: Arc<ProductRepository>,
    orders: Arc<dyn OrderRepository>,
    service_offerings: Arc<ServiceOfferingRepository>,
}

impl References {
    pub fn new(
        users: Arc<dyn UserRepository>,
        categories: Arc<CategoryRepository>,
        products: Arc<ProductRepository>,
        orders: Arc<dyn OrderRepository>,
        service_offerings: Arc<ServiceOfferingRepository>,
    ) -> Self {
        Self { users, categories, products, orders, service_offerings }
    }

    pub async fn has_user(&self, id: i64) -> Result<bool, ServiceError> {
        Ok(self.users.get(id).await?.is_some())
    }

    pub async fn require_user(&self, id: i64) -> Result<(), ServiceError> {
        check(self.has_user(id).await?, "user", id)
    }

    pub async fn require_category(&self, id: i64) -> Result<(), ServiceError> {
        check(self.categories.get(id).await?.is_some(), "category", id)
    }

    pub async fn require_product(&self, id: i64) -> Result<(), ServiceError> {
        check(self.products.get(id).await?.is_some(), "product", id)
    }

    pub async fn require_order(&self, id: i64) -> Result<(), ServiceError> {
        check(self.orders.get(id).await?.is_some(), "order", id)
    }

    pub async fn require_service_offering(&self, id: i64) -> Result<(), ServiceError> {
        check(self.service_offerings.get(id).await?.is_some(), "service", id)
    }
}

fn check(found: bool, entity: &str, id: i64) -> Result<(), ServiceError> {
    if found { Ok(()) } else { Err(ServiceError::missing_reference(entity, id)) }
}
