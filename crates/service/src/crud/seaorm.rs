use std::marker::PhantomData;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel, Iterable, ModelTrait,
    PrimaryKeyToColumn, PrimaryKeyTrait, QueryOrder,
};

use models::traits::Patch;

use super::repository::CrudRepository;
use crate::errors::ServiceError;

/// SeaORM-backed repository, one per entity.
pub struct SeaOrmRepository<E> {
    db: DatabaseConnection,
    _entity: PhantomData<fn() -> E>,
}

impl<E> SeaOrmRepository<E> {
    pub fn new(db: DatabaseConnection) -> Self { Self { db, _entity: PhantomData } }

    pub fn db(&self) -> &DatabaseConnection { &self.db }
}

#[async_trait]
impl<E, D, C> CrudRepository<E::Model, D, C> for SeaOrmRepository<E>
where
    E: EntityTrait,
    E::Model: IntoActiveModel<E::ActiveModel> + Send + Sync,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i64>,
    D: IntoActiveModel<E::ActiveModel> + Send + 'static,
    C: Patch<E::Model> + Send + 'static,
{
    async fn list(&self) -> Result<Vec<E::Model>, ServiceError> {
        let mut query = E::find();
        for key in E::PrimaryKey::iter() {
            query = query.order_by_asc(key.into_column());
        }
        Ok(query.all(&self.db).await?)
    }

    async fn get(&self, id: i64) -> Result<Option<E::Model>, ServiceError> {
        Ok(E::find_by_id(id).one(&self.db).await?)
    }

    async fn insert(&self, draft: D) -> Result<E::Model, ServiceError> {
        let active: E::ActiveModel = draft.into_active_model();
        Ok(active.insert(&self.db).await?)
    }

    /// Only columns whose value actually changed are written.
    async fn update(&self, id: i64, changes: C) -> Result<Option<E::Model>, ServiceError> {
        let Some(current) = E::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };
        let mut next = current.clone();
        changes.apply(&mut next);

        let mut active: E::ActiveModel = current.clone().into_active_model();
        let mut dirty = false;
        for col in E::Column::iter() {
            let value = next.get(col);
            if value != current.get(col) {
                active.set(col, value);
                dirty = true;
            }
        }
        if !dirty {
            return Ok(Some(current));
        }
        Ok(Some(active.update(&self.db).await?))
    }

    async fn delete(&self, id: i64) -> Result<bool, ServiceError> {
        let res = E::delete_by_id(id).exec(&self.db).await?;
        Ok(res.rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;
    use models::category::{self, CategoryChanges, NewCategory};
    use uuid::Uuid;

    type Repo = SeaOrmRepository<category::Entity>;
    type Crud = dyn CrudRepository<category::Model, NewCategory, CategoryChanges>;

    #[tokio::test]
    async fn partial_update_round_trip() -> anyhow::Result<()> {
        let Some(db) = get_db().await? else { return Ok(()) };
        let repo: Box<Crud> = Box::new(Repo::new(db));

        let name = format!("Enduro {}", Uuid::new_v4());
        let created = repo
            .insert(NewCategory { name: name.clone(), description: Some("off-road".into()), image_url: None })
            .await?;

        let unchanged = repo.update(created.id, CategoryChanges::default()).await?.expect("row");
        assert_eq!(unchanged, created);

        let updated = repo
            .update(created.id, CategoryChanges { description: Some("dual sport".into()), ..Default::default() })
            .await?
            .expect("row");
        assert_eq!(updated.description.as_deref(), Some("dual sport"));
        assert_eq!(updated.name, name);

        assert!(repo.list().await?.iter().any(|c| c.id == created.id));
        assert!(repo.delete(created.id).await?);
        assert!(repo.get(created.id).await?.is_none());
        assert!(!repo.delete(created.id).await?);
        Ok(())
    }
}
