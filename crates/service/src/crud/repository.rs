use async_trait::async_trait;

use crate::errors::ServiceError;

/// Storage contract for one entity.
///
/// `M` is the stored model, `D` the draft used on insert and `C` the
/// partial change set used on update.
#[async_trait]
pub trait CrudRepository<M, D, C>: Send + Sync {
    /// All rows, ordered by id.
    async fn list(&self) -> Result<Vec<M>, ServiceError>;
    async fn get(&self, id: i64) -> Result<Option<M>, ServiceError>;
    async fn insert(&self, draft: D) -> Result<M, ServiceError>;
    /// `None` when no row has this id.
    async fn update(&self, id: i64, changes: C) -> Result<Option<M>, ServiceError>;
    /// `false` when no row has this id.
    async fn delete(&self, id: i64) -> Result<bool, ServiceError>;
}

/// In-memory repository for tests and doc examples
pub mod memory {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::atomic::{AtomicI64, Ordering};

    use models::traits::Patch;
    use sea_orm::{ActiveModelTrait, EntityTrait, IntoActiveModel, Iterable, PrimaryKeyToColumn, TryIntoModel, Value};
    use tokio::sync::Mutex;

    /// Rows live in a `BTreeMap` keyed by id, so listing is ordered.
    pub struct MemoryRepository<E: EntityTrait> {
        rows: Mutex<BTreeMap<i64, E::Model>>,
        next_id: AtomicI64,
    }

    impl<E: EntityTrait> Default for MemoryRepository<E> {
        fn default() -> Self {
            Self { rows: Mutex::new(BTreeMap::new()), next_id: AtomicI64::new(1) }
        }
    }

    impl<E: EntityTrait> MemoryRepository<E> {
        pub fn new() -> Self { Self::default() }

        /// Rows matching `pred`, in id order.
        pub async fn filter<F>(&self, pred: F) -> Vec<E::Model>
        where
            F: Fn(&E::Model) -> bool,
        {
            let rows = self.rows.lock().await;
            rows.values().filter(|m| pred(m)).cloned().collect()
        }
    }

    #[async_trait]
    impl<E, D, C> CrudRepository<E::Model, D, C> for MemoryRepository<E>
    where
        E: EntityTrait,
        E::Model: Send + Sync,
        E::ActiveModel: ActiveModelTrait<Entity = E> + TryIntoModel<E::Model> + Send,
        D: IntoActiveModel<E::ActiveModel> + Send + 'static,
        C: Patch<E::Model> + Send + 'static,
    {
        async fn list(&self) -> Result<Vec<E::Model>, ServiceError> {
            Ok(self.rows.lock().await.values().cloned().collect())
        }

        async fn get(&self, id: i64) -> Result<Option<E::Model>, ServiceError> {
            Ok(self.rows.lock().await.get(&id).cloned())
        }

        async fn insert(&self, draft: D) -> Result<E::Model, ServiceError> {
            let id = self.next_id.fetch_add(1, Ordering::SeqCst);
            let mut active: E::ActiveModel = draft.into_active_model();
            for key in E::PrimaryKey::iter() {
                active.set(key.into_column(), Value::BigInt(Some(id)));
            }
            let model = active.try_into_model()?;
            self.rows.lock().await.insert(id, model.clone());
            Ok(model)
        }

        async fn update(&self, id: i64, changes: C) -> Result<Option<E::Model>, ServiceError> {
            let mut rows = self.rows.lock().await;
            let Some(row) = rows.get_mut(&id) else { return Ok(None) };
            changes.apply(row);
            Ok(Some(row.clone()))
        }

        async fn delete(&self, id: i64) -> Result<bool, ServiceError> {
            Ok(self.rows.lock().await.remove(&id).is_some())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::memory::MemoryRepository;
    use super::*;
    use models::category::{self, CategoryChanges, NewCategory};

    type Repo = MemoryRepository<category::Entity>;

    fn draft(name: &str) -> NewCategory {
        NewCategory { name: name.into(), description: None, image_url: None }
    }

    #[tokio::test]
    async fn assigns_increasing_ids_and_lists_in_order() {
        let repo = Repo::new();
        let a = CrudRepository::<_, NewCategory, CategoryChanges>::insert(&repo, draft("Sport")).await.unwrap();
        let b = CrudRepository::<_, NewCategory, CategoryChanges>::insert(&repo, draft("Touring")).await.unwrap();
        assert_eq!((a.id, b.id), (1, 2));
        let all = CrudRepository::<_, NewCategory, CategoryChanges>::list(&repo).await.unwrap();
        assert_eq!(all.iter().map(|c| c.name.as_str()).collect::<Vec<_>>(), ["Sport", "Touring"]);
    }

    #[tokio::test]
    async fn update_and_delete_report_missing_rows() {
        let repo = Repo::new();
        let missing = CrudRepository::<_, NewCategory, CategoryChanges>::update(&repo, 42, CategoryChanges::default()).await.unwrap();
        assert!(missing.is_none());
        assert!(!CrudRepository::<category::Model, NewCategory, CategoryChanges>::delete(&repo, 42).await.unwrap());
    }
}
