use async_trait::async_trait;
use sea_orm::{ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder};

use models::user::{self, NewUser, UserChanges};

use crate::crud::{CrudRepository, MemoryRepository, SeaOrmRepository};
use crate::errors::ServiceError;

#[async_trait]
pub trait UserRepository: CrudRepository<user::Model, NewUser, UserChanges> {
    async fn find_by_email(&self, email: &str) -> Result<Option<user::Model>, ServiceError>;

    /// Login lookup: `username` matches the full name or the email.
    ///
    /// Full names are not unique. When several users share one, the oldest
    /// (lowest id) wins, so the others can only log in by email.
    async fn find_by_login(&self, username: &str) -> Result<Option<user::Model>, ServiceError>;
}

#[async_trait]
impl UserRepository for SeaOrmRepository<user::Entity> {
    async fn find_by_email(&self, email: &str) -> Result<Option<user::Model>, ServiceError> {
        Ok(user::Entity::find()
            .filter(user::Column::Email.eq(email))
            .one(self.db())
            .await?)
    }

    async fn find_by_login(&self, username: &str) -> Result<Option<user::Model>, ServiceError> {
        Ok(user::Entity::find()
            .filter(
                Condition::any()
                    .add(user::Column::FullName.eq(username))
                    .add(user::Column::Email.eq(username)),
            )
            .order_by_asc(user::Column::Id)
            .one(self.db())
            .await?)
    }
}

#[async_trait]
impl UserRepository for MemoryRepository<user::Entity> {
    async fn find_by_email(&self, email: &str) -> Result<Option<user::Model>, ServiceError> {
        Ok(self.filter(|u| u.email == email).await.into_iter().next())
    }

    async fn find_by_login(&self, username: &str) -> Result<Option<user::Model>, ServiceError> {
        Ok(self
            .filter(|u| u.full_name == username || u.email == username)
            .await
            .into_iter()
            .next())
    }
}
