use std::sync::Arc;

use tracing::{info, instrument, warn};

use super::domain::{AuthSession, LoginInput};
use super::errors::AuthError;
use super::password::verify_password;
use crate::user::UserRepository;

/// Auth business service independent of web framework
pub struct AuthService {
    users: Arc<dyn UserRepository>,
}

impl AuthService {
    pub fn new(users: Arc<dyn UserRepository>) -> Self { Self { users } }

    /// Check a username/password pair against the stored hash.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use service::auth::{AuthService, domain::LoginInput};
    /// use service::crud::MemoryRepository;
    /// use service::user::{UserService, domain::CreateUserInput, UserRepository};
    ///
    /// let repo: Arc<dyn UserRepository> = Arc::new(MemoryRepository::<models::user::Entity>::new());
    /// let users = UserService::new(repo.clone(), 4);
    /// let user = tokio_test::block_on(users.create(CreateUserInput {
    ///     full_name: "Rider".into(), email: "rider@example.com".into(), password: "Passw0rd".into(),
    ///     phone_number: None, address: None, role: None, profile_image_url: None,
    /// })).unwrap();
    /// let auth = AuthService::new(repo);
    /// let session = tokio_test::block_on(auth.login(LoginInput { username: "Rider".into(), password: "Passw0rd".into() })).unwrap();
    /// assert_eq!(session.user_id, user.id);
    /// ```
    #[instrument(skip(self, input), fields(username = %input.username))]
    pub async fn login(&self, input: LoginInput) -> Result<AuthSession, AuthError> {
        let user = match self.users.find_by_login(&input.username).await? {
            Some(u) => u,
            None => {
                warn!("login_unknown_user");
                return Err(AuthError::Unauthorized);
            }
        };

        if !self.verify(input.password, user.password_hash.clone()).await? {
            warn!(user_id = user.id, "login_bad_password");
            return Err(AuthError::Unauthorized);
        }

        info!(user_id = user.id, "login_ok");
        Ok(AuthSession { user_id: user.id })
    }

    // bcrypt is CPU bound; keep it off the async workers.
    async fn verify(&self, password: String, hash: String) -> Result<bool, AuthError> {
        tokio::task::spawn_blocking(move || verify_password(&password, &hash))
            .await
            .map_err(|e| AuthError::HashError(e.to_string()))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crud::MemoryRepository;
    use crate::user::{domain::CreateUserInput, UserService};

    async fn setup() -> (AuthService, i64) {
        let repo: Arc<dyn UserRepository> = Arc::new(MemoryRepository::<models::user::Entity>::new());
        let users = UserService::new(repo.clone(), 4);
        let u = users
            .create(CreateUserInput {
                full_name: "Marta Gil".into(),
                email: "marta@example.com".into(),
                password: "correct horse".into(),
                phone_number: None,
                address: None,
                role: None,
                profile_image_url: None,
            })
            .await
            .unwrap();
        (AuthService::new(repo), u.id)
    }

    fn creds(username: &str, password: &str) -> LoginInput {
        LoginInput { username: username.into(), password: password.into() }
    }

    #[tokio::test]
    async fn unknown_user_is_unauthorized() {
        let (auth, _) = setup().await;
        assert!(matches!(auth.login(creds("no-such-user", "x")).await, Err(AuthError::Unauthorized)));
    }

    #[tokio::test]
    async fn wrong_password_is_unauthorized() {
        let (auth, _) = setup().await;
        assert!(matches!(auth.login(creds("Marta Gil", "wrong")).await, Err(AuthError::Unauthorized)));
    }

    #[tokio::test]
    async fn shared_full_name_resolves_to_oldest_account() {
        let (auth, first) = setup().await;
        let users = UserService::new(auth.users.clone(), 4);
        let second = users
            .create(CreateUserInput {
                full_name: "Marta Gil".into(),
                email: "marta.gil@example.com".into(),
                password: "other horse".into(),
                phone_number: None,
                address: None,
                role: None,
                profile_image_url: None,
            })
            .await
            .unwrap();
        assert_eq!(auth.login(creds("Marta Gil", "correct horse")).await.unwrap().user_id, first);
        assert!(matches!(auth.login(creds("Marta Gil", "other horse")).await, Err(AuthError::Unauthorized)));
        assert_eq!(auth.login(creds("marta.gil@example.com", "other horse")).await.unwrap().user_id, second.id);
    }

    #[tokio::test]
    async fn full_name_or_email_logs_in() {
        let (auth, id) = setup().await;
        assert_eq!(auth.login(creds("Marta Gil", "correct horse")).await.unwrap().user_id, id);
        assert_eq!(auth.login(creds("marta@example.com", "correct horse")).await.unwrap().user_id, id);
    }
}
