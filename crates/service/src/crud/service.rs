use std::marker::PhantomData;
use std::sync::Arc;

use tracing::{debug, info};

use models::traits::{HasId, Patch, Validate};

use super::repository::CrudRepository;
use crate::errors::ServiceError;

/// Business-level CRUD over any repository.
///
/// Validates drafts and change sets, turns missing rows into
/// [`ServiceError::NotFound`] and logs each write.
///
/// # Examples
/// ```
/// use std::sync::Arc;
/// use service::crud::{CrudService, MemoryRepository};
/// use service::entities::CategoryRepository;
/// use models::category::{self, CategoryChanges, NewCategory};
///
/// let repo: Arc<CategoryRepository> = Arc::new(MemoryRepository::<category::Entity>::new());
/// let svc = CrudService::new(repo, "category");
/// let c = tokio_test::block_on(svc.create(NewCategory { name: "Scooters".into(), description: None, image_url: None })).unwrap();
/// let renamed = tokio_test::block_on(svc.update(c.id, CategoryChanges { name: Some("Mopeds".into()), ..Default::default() })).unwrap();
/// assert_eq!(renamed.name, "Mopeds");
/// ```
pub struct CrudService<M, D, C, R: ?Sized = dyn CrudRepository<M, D, C>> {
    repo: Arc<R>,
    entity: &'static str,
    _types: PhantomData<fn() -> (M, D, C)>,
}

impl<M, D, C, R> CrudService<M, D, C, R>
where
    M: HasId,
    D: Validate,
    C: Validate + Patch<M>,
    R: CrudRepository<M, D, C> + ?Sized,
{
    pub fn new(repo: Arc<R>, entity: &'static str) -> Self {
        Self { repo, entity, _types: PhantomData }
    }

    pub fn repo(&self) -> &Arc<R> { &self.repo }

    pub fn entity(&self) -> &'static str { self.entity }

    pub async fn list(&self) -> Result<Vec<M>, ServiceError> {
        let rows = self.repo.list().await?;
        debug!(entity = self.entity, count = rows.len(), "listed");
        Ok(rows)
    }

    pub async fn get(&self, id: i64) -> Result<M, ServiceError> {
        self.repo
            .get(id)
            .await?
            .ok_or_else(|| ServiceError::not_found(self.entity, id))
    }

    pub async fn create(&self, draft: D) -> Result<M, ServiceError> {
        draft.validate()?;
        let created = self.repo.insert(draft).await?;
        info!(entity = self.entity, id = created.id(), "created");
        Ok(created)
    }

    /// Apply only the fields present in `changes`; an empty change set
    /// returns the stored row untouched.
    pub async fn update(&self, id: i64, changes: C) -> Result<M, ServiceError> {
        changes.validate()?;
        if changes.is_empty() {
            debug!(entity = self.entity, id, "empty update");
            return self.get(id).await;
        }
        let updated = self
            .repo
            .update(id, changes)
            .await?
            .ok_or_else(|| ServiceError::not_found(self.entity, id))?;
        info!(entity = self.entity, id, "updated");
        Ok(updated)
    }

    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        if !self.repo.delete(id).await? {
            return Err(ServiceError::not_found(self.entity, id));
        }
        info!(entity = self.entity, id, "deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crud::MemoryRepository;
    use models::product::{self, NewProduct, ProductChanges};
    use rust_decimal::Decimal;

    type Svc = CrudService<product::Model, NewProduct, ProductChanges>;

    fn svc() -> Svc {
        let repo: Arc<crate::entities::ProductRepository> = Arc::new(MemoryRepository::<product::Entity>::new());
        CrudService::new(repo, "product")
    }

    fn helmet() -> NewProduct {
        NewProduct {
            category_id: None,
            name: "Helmet".into(),
            description: Some("Full face".into()),
            price: Decimal::new(12990, 2),
            stock_quantity: Some(4),
            image_url: None,
            brand: Some("Shoei".into()),
            model_year: None,
            engine_cc: None,
            color: Some("black".into()),
            condition_status: None,
        }
    }

    #[tokio::test]
    async fn create_then_get_returns_submitted_fields() {
        let svc = svc();
        let created = svc.create(helmet()).await.unwrap();
        let fetched = svc.get(created.id).await.unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.name, "Helmet");
        assert_eq!(fetched.price, Decimal::new(12990, 2));
        assert_eq!(fetched.condition_status, product::DEFAULT_CONDITION);
    }

    #[tokio::test]
    async fn invalid_draft_is_not_persisted() {
        let svc = svc();
        let err = svc.create(NewProduct { price: Decimal::new(-1, 0), ..helmet() }).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
        assert!(svc.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_changes_only_present_field() {
        let svc = svc();
        let created = svc.create(helmet()).await.unwrap();
        let updated = svc
            .update(created.id, ProductChanges { stock_quantity: Some(9), ..Default::default() })
            .await
            .unwrap();
        assert_eq!(updated.stock_quantity, 9);
        assert_eq!(product::Model { stock_quantity: created.stock_quantity, ..updated }, created);
    }

    #[tokio::test]
    async fn empty_update_is_noop() {
        let svc = svc();
        let created = svc.create(helmet()).await.unwrap();
        let same = svc.update(created.id, ProductChanges::default()).await.unwrap();
        assert_eq!(same, created);
    }

    #[tokio::test]
    async fn missing_ids_are_not_found() {
        let svc = svc();
        assert!(matches!(svc.get(99).await, Err(ServiceError::NotFound(_))));
        let upd = svc.update(99, ProductChanges { name: Some("x".into()), ..Default::default() }).await;
        assert!(matches!(upd, Err(ServiceError::NotFound(_))));
        assert!(matches!(svc.delete(99).await, Err(ServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn delete_then_get_is_not_found() {
        let svc = svc();
        let created = svc.create(helmet()).await.unwrap();
        svc.delete(created.id).await.unwrap();
        assert!(matches!(svc.get(created.id).await, Err(ServiceError::NotFound(_))));
    }
}
