//! Reviews: the reviewed product and the author must exist.

use std::sync::Arc;

use models::review::{self, NewReview, ReviewChanges};

use crate::crud::CrudService;
use crate::entities::ReviewRepository;
use crate::errors::ServiceError;
use crate::references::References;

pub struct ReviewService {
    crud: CrudService<review::Model, NewReview, ReviewChanges>,
    refs: References,
}

impl ReviewService {
    pub fn new(repo: Arc<ReviewRepository>, refs: References) -> Self {
        Self { crud: CrudService::new(repo, "review"), refs }
    }

    pub async fn list(&self) -> Result<Vec<review::Model>, ServiceError> { self.crud.list().await }

    pub async fn get(&self, id: i64) -> Result<review::Model, ServiceError> { self.crud.get(id).await }

    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> { self.crud.delete(id).await }

    pub async fn create(&self, draft: NewReview) -> Result<review::Model, ServiceError> {
        self.refs.require_product(draft.product_id).await?;
        self.refs.require_user(draft.user_id).await?;
        self.crud.create(draft).await
    }

    pub async fn update(&self, id: i64, changes: ReviewChanges) -> Result<review::Model, ServiceError> {
        if let Some(product_id) = changes.product_id {
            self.refs.require_product(product_id).await?;
        }
        if let Some(user_id) = changes.user_id {
            self.refs.require_user(user_id).await?;
        }
        self.crud.update(id, changes).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Services;

    #[tokio::test]
    async fn dangling_product_and_user_are_rejected() {
        let s = Services::in_memory(4);
        let err = s
            .reviews
            .create(NewReview { product_id: 999, user_id: 999, rating: 5, comment: None })
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Validation(m) if m.contains("product 999")));
        assert!(s.reviews.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_to_unknown_user_is_rejected() {
        let s = Services::in_memory(4);
        let err = s
            .reviews
            .update(1, ReviewChanges { user_id: Some(5), ..Default::default() })
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Validation(m) if m.contains("user 5")));
    }
}
