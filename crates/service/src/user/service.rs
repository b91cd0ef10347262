use std::sync::Arc;

use tracing::{debug, instrument};

use models::user::{self, NewUser, UserChanges};

use super::domain::{CreateUserInput, UpdateUserInput};
use super::repository::UserRepository;
use crate::auth::errors::AuthError;
use crate::auth::password::hash_password;
use crate::crud::CrudService;
use crate::errors::ServiceError;

/// User CRUD. Plaintext passwords never leave this service: they are
/// bcrypt-hashed before the draft reaches the repository.
pub struct UserService {
    crud: CrudService<user::Model, NewUser, UserChanges, dyn UserRepository>,
    bcrypt_cost: u32,
}

impl UserService {
    pub fn new(repo: Arc<dyn UserRepository>, bcrypt_cost: u32) -> Self {
        Self { crud: CrudService::new(repo, "user"), bcrypt_cost }
    }

    pub fn repository(&self) -> Arc<dyn UserRepository> { self.crud.repo().clone() }

    pub async fn list(&self) -> Result<Vec<user::Model>, ServiceError> { self.crud.list().await }

    pub async fn get(&self, id: i64) -> Result<user::Model, ServiceError> { self.crud.get(id).await }

    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> { self.crud.delete(id).await }

    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn create(&self, input: CreateUserInput) -> Result<user::Model, ServiceError> {
        self.ensure_email_free(&input.email, None).await?;
        let password_hash = self.hash(input.password).await?;
        self.crud
            .create(NewUser {
                full_name: input.full_name,
                email: input.email,
                password_hash,
                phone_number: input.phone_number,
                address: input.address,
                role: input.role,
                profile_image_url: input.profile_image_url,
            })
            .await
    }

    #[instrument(skip(self, input))]
    pub async fn update(&self, id: i64, input: UpdateUserInput) -> Result<user::Model, ServiceError> {
        if let Some(email) = &input.email {
            self.ensure_email_free(email, Some(id)).await?;
        }
        let password_hash = match input.password {
            Some(p) => Some(self.hash(p).await?),
            None => None,
        };
        self.crud
            .update(
                id,
                UserChanges {
                    full_name: input.full_name,
                    email: input.email,
                    password_hash,
                    phone_number: input.phone_number,
                    address: input.address,
                    role: input.role,
                    profile_image_url: input.profile_image_url,
                },
            )
            .await
    }

    async fn ensure_email_free(&self, email: &str, owner: Option<i64>) -> Result<(), ServiceError> {
        match self.crud.repo().find_by_email(email).await? {
            Some(existing) if Some(existing.id) != owner => {
                debug!(user_id = existing.id, "email taken");
                Err(ServiceError::Conflict("email already registered".into()))
            }
            _ => Ok(()),
        }
    }

    // bcrypt is CPU bound; keep it off the async workers.
    async fn hash(&self, password: String) -> Result<String, ServiceError> {
        let cost = self.bcrypt_cost;
        tokio::task::spawn_blocking(move || hash_password(&password, cost))
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?
            .map_err(|e| match e {
                AuthError::Validation(msg) => ServiceError::Validation(msg),
                other => ServiceError::Db(other.to_string()),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::password::verify_password;
    use crate::crud::MemoryRepository;

    fn svc() -> UserService {
        UserService::new(Arc::new(MemoryRepository::<user::Entity>::new()), 4)
    }

    fn input(email: &str) -> CreateUserInput {
        CreateUserInput {
            full_name: "Luis Paz".into(),
            email: email.into(),
            password: "hunter22".into(),
            phone_number: Some("600111222".into()),
            address: None,
            role: None,
            profile_image_url: Some("abc_avatar.png".into()),
        }
    }

    #[tokio::test]
    async fn create_stores_hash_not_plaintext() {
        let svc = svc();
        let u = svc.create(input("luis@example.com")).await.unwrap();
        assert_ne!(u.password_hash, "hunter22");
        assert!(verify_password("hunter22", &u.password_hash).unwrap());
        assert_eq!(u.role, user::DEFAULT_ROLE);
        assert_eq!(u.profile_image_url.as_deref(), Some("abc_avatar.png"));
    }

    #[tokio::test]
    async fn duplicate_email_conflicts() {
        let svc = svc();
        svc.create(input("dup@example.com")).await.unwrap();
        let err = svc.create(input("dup@example.com")).await.unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)));
    }

    #[tokio::test]
    async fn bad_email_is_rejected() {
        let err = svc().create(input("nope")).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[tokio::test]
    async fn password_update_rehashes() {
        let svc = svc();
        let u = svc.create(input("pw@example.com")).await.unwrap();
        let updated = svc
            .update(u.id, UpdateUserInput { password: Some("new-secret".into()), ..Default::default() })
            .await
            .unwrap();
        assert!(verify_password("new-secret", &updated.password_hash).unwrap());
        assert_eq!(updated.email, u.email);
    }

    #[tokio::test]
    async fn keeping_own_email_is_not_a_conflict() {
        let svc = svc();
        let u = svc.create(input("same@example.com")).await.unwrap();
        let updated = svc
            .update(u.id, UpdateUserInput { email: Some("same@example.com".into()), ..Default::default() })
            .await
            .unwrap();
        assert_eq!(updated.id, u.id);
    }
}
