//! Products: generic CRUD plus a category existence check.

use std::sync::Arc;

use models::product::{self, NewProduct, ProductChanges};

use crate::crud::CrudService;
use crate::entities::ProductRepository;
use crate::errors::ServiceError;
use crate::references::References;

pub struct ProductService {
    crud: CrudService<product::Model, NewProduct, ProductChanges>,
    refs: References,
}

impl ProductService {
    pub fn new(repo: Arc<ProductRepository>, refs: References) -> Self {
        Self { crud: CrudService::new(repo, "product"), refs }
    }

    pub async fn list(&self) -> Result<Vec<product::Model>, ServiceError> { self.crud.list().await }

    pub async fn get(&self, id: i64) -> Result<product::Model, ServiceError> { self.crud.get(id).await }

    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> { self.crud.delete(id).await }

    pub async fn create(&self, draft: NewProduct) -> Result<product::Model, ServiceError> {
        if let Some(category_id) = draft.category_id {
            self.refs.require_category(category_id).await?;
        }
        self.crud.create(draft).await
    }

    pub async fn update(&self, id: i64, changes: ProductChanges) -> Result<product::Model, ServiceError> {
        if let Some(category_id) = changes.category_id {
            self.refs.require_category(category_id).await?;
        }
        self.crud.update(id, changes).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Services;
    use models::category::NewCategory;
    use rust_decimal::Decimal;

    fn draft(category_id: Option<i64>) -> NewProduct {
        NewProduct {
            category_id,
            name: "Kawasaki Z900".into(),
            description: None,
            price: Decimal::new(999_000, 2),
            stock_quantity: Some(1),
            image_url: None,
            brand: Some("Kawasaki".into()),
            model_year: Some(2024),
            engine_cc: Some(948),
            color: None,
            condition_status: None,
        }
    }

    #[tokio::test]
    async fn unknown_category_is_rejected() {
        let s = Services::in_memory(4);
        let err = s.products.create(draft(Some(9))).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(m) if m.contains("category 9")));
        assert!(s.products.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn existing_or_absent_category_is_accepted() {
        let s = Services::in_memory(4);
        let naked = s
            .categories
            .create(NewCategory { name: "Naked".into(), description: None, image_url: None })
            .await
            .unwrap();
        let p = s.products.create(draft(Some(naked.id))).await.unwrap();
        assert_eq!(p.category_id, Some(naked.id));
        assert!(s.products.create(draft(None)).await.is_ok());

        let err = s
            .products
            .update(p.id, ProductChanges { category_id: Some(42), ..Default::default() })
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }
}
