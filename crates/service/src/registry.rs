//! Wires repositories and services for one storage backend.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use models::{appointment, category, order, order_item, product, review, service_offering, user};

use crate::appointment::AppointmentService;
use crate::auth::AuthService;
use crate::crud::{CrudService, MemoryRepository, SeaOrmRepository};
use crate::entities::{
    AppointmentRepository, CategoryRepository, CategoryService, ProductRepository, ReviewRepository,
    ServiceOfferingRepository, ServiceOfferingService,
};
use crate::order::{OrderRepository, OrderService};
use crate::order_item::{OrderItemRepository, OrderItemService};
use crate::product::ProductService;
use crate::references::References;
use crate::review::ReviewService;
use crate::user::{UserRepository, UserService};

/// Every entity service, sharing one set of repositories.
#[derive(Clone)]
pub struct Services {
    pub users: Arc<UserService>,
    pub auth: Arc<AuthService>,
    pub categories: Arc<CategoryService>,
    pub products: Arc<ProductService>,
    pub orders: Arc<OrderService>,
    pub order_items: Arc<OrderItemService>,
    pub reviews: Arc<ReviewService>,
    pub service_offerings: Arc<ServiceOfferingService>,
    pub appointments: Arc<AppointmentService>,
}

struct Repos {
    users: Arc<dyn UserRepository>,
    categories: Arc<CategoryRepository>,
    products: Arc<ProductRepository>,
    orders: Arc<dyn OrderRepository>,
    order_items: Arc<dyn OrderItemRepository>,
    reviews: Arc<ReviewRepository>,
    service_offerings: Arc<ServiceOfferingRepository>,
    appointments: Arc<AppointmentRepository>,
}

impl Services {
    pub fn seaorm(db: DatabaseConnection, bcrypt_cost: u32) -> Self {
        Self::assemble(
            Repos {
                users: Arc::new(SeaOrmRepository::<user::Entity>::new(db.clone())),
                categories: Arc::new(SeaOrmRepository::<category::Entity>::new(db.clone())),
                products: Arc::new(SeaOrmRepository::<product::Entity>::new(db.clone())),
                orders: Arc::new(SeaOrmRepository::<order::Entity>::new(db.clone())),
                order_items: Arc::new(SeaOrmRepository::<order_item::Entity>::new(db.clone())),
                reviews: Arc::new(SeaOrmRepository::<review::Entity>::new(db.clone())),
                service_offerings: Arc::new(SeaOrmRepository::<service_offering::Entity>::new(db.clone())),
                appointments: Arc::new(SeaOrmRepository::<appointment::Entity>::new(db)),
            },
            bcrypt_cost,
        )
    }

    /// Volatile storage for tests and local experiments.
    pub fn in_memory(bcrypt_cost: u32) -> Self {
        Self::assemble(
            Repos {
                users: Arc::new(MemoryRepository::<user::Entity>::new()),
                categories: Arc::new(MemoryRepository::<category::Entity>::new()),
                products: Arc::new(MemoryRepository::<product::Entity>::new()),
                orders: Arc::new(MemoryRepository::<order::Entity>::new()),
                order_items: Arc::new(MemoryRepository::<order_item::Entity>::new()),
                reviews: Arc::new(MemoryRepository::<review::Entity>::new()),
                service_offerings: Arc::new(MemoryRepository::<service_offering::Entity>::new()),
                appointments: Arc::new(MemoryRepository::<appointment::Entity>::new()),
            },
            bcrypt_cost,
        )
    }

    fn assemble(repos: Repos, bcrypt_cost: u32) -> Self {
        let refs = References::new(
            repos.users.clone(),
            repos.categories.clone(),
            repos.products.clone(),
            repos.orders.clone(),
            repos.service_offerings.clone(),
        );
        Self {
            users: Arc::new(UserService::new(repos.users.clone(), bcrypt_cost)),
            auth: Arc::new(AuthService::new(repos.users)),
            categories: Arc::new(CrudService::new(repos.categories, "category")),
            products: Arc::new(ProductService::new(repos.products, refs.clone())),
            orders: Arc::new(OrderService::new(repos.orders, repos.order_items.clone(), refs.clone())),
            order_items: Arc::new(OrderItemService::new(repos.order_items, refs.clone())),
            reviews: Arc::new(ReviewService::new(repos.reviews, refs.clone())),
            service_offerings: Arc::new(CrudService::new(repos.service_offerings, "service")),
            appointments: Arc::new(AppointmentService::new(repos.appointments, refs)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::category::NewCategory;

    #[tokio::test]
    async fn in_memory_services_share_nothing_between_instances() {
        let a = Services::in_memory(4);
        let b = Services::in_memory(4);
        a.categories
            .create(NewCategory { name: "Cafe racers".into(), description: None, image_url: None })
            .await
            .unwrap();
        assert_eq!(a.categories.list().await.unwrap().len(), 1);
        assert!(b.categories.list().await.unwrap().is_empty());
    }
}
