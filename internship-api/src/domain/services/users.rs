use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{
    models::{NewUser, ProfilePatch, Registration, User},
    ports::{
        inbound::UserService,
        outbound::{PasswordHasher, UserStore},
    },
    UserError,
};

pub struct UserServiceImpl<S, H> {
    store: Arc<S>,
    hasher: Arc<H>,
}

impl<S, H> UserServiceImpl<S, H> {
    pub fn new(store: Arc<S>, hasher: Arc<H>) -> Self {
        Self { store, hasher }
    }
}

impl<S: UserStore, H: PasswordHasher> UserServiceImpl<S, H> {
    async fn hash_password(&self, password: String) -> Result<String, UserError> {
        let hasher = Arc::clone(&self.hasher);
        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|err| UserError::Hashing(format!("hashing task failed: {err}")))?
    }

    async fn verify_password(
        &self,
        password: String,
        password_hash: String,
    ) -> Result<bool, UserError> {
        let hasher = Arc::clone(&self.hasher);
        tokio::task::spawn_blocking(move || hasher.verify(&password, &password_hash))
            .await
            .map_err(|err| UserError::Hashing(format!("verification task failed: {err}")))?
    }
}

#[async_trait]
impl<S: UserStore, H: PasswordHasher> UserService for UserServiceImpl<S, H> {
    async fn register(&self, registration: Registration) -> Result<User, UserError> {
        let name = registration.display_name();
        let Registration {
            email,
            password,
            phone,
            college,
            ..
        } = registration;

        let (Some(email), Some(password), Some(phone), Some(name)) = (
            email.filter(|e| !e.trim().is_empty()),
            password.filter(|p| !p.is_empty()),
            phone,
            name,
        ) else {
            return Err(UserError::Validation(
                "email, password, phone and name are required".to_string(),
            ));
        };

        if self.store.find_by_email(&email).await?.is_some() {
            return Err(UserError::EmailTaken);
        }

        let password_hash = self.hash_password(password).await?;
        let user = self
            .store
            .insert(&NewUser {
                email,
                phone,
                name,
                college,
                password_hash,
            })
            .await?;

        tracing::info!(user_id = %user.id, "user registered");
        Ok(user)
    }

    async fn login(&self, email: &str, password: &str) -> Result<User, UserError> {
        let user = self
            .store
            .find_by_email(email)
            .await?
            .ok_or(UserError::InvalidCredentials)?;

        let valid = self
            .verify_password(password.to_string(), user.password_hash.clone())
            .await?;
        if !valid {
            return Err(UserError::InvalidCredentials);
        }

        Ok(user)
    }

    async fn count(&self) -> Result<u64, UserError> {
        self.store.count().await
    }

    async fn all(&self) -> Result<Vec<User>, UserError> {
        self.store.all().await
    }

    async fn get(&self, email: &str) -> Result<User, UserError> {
        self.store
            .find_by_email(email)
            .await?
            .ok_or(UserError::NotFound)
    }

    async fn update_profile(&self, email: &str, patch: ProfilePatch) -> Result<User, UserError> {
        self.store
            .update_profile(email, &patch)
            .await?
            .ok_or(UserError::NotFound)
    }

    async fn update_password(
        &self,
        email: &str,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), UserError> {
        if new_password.is_empty() {
            return Err(UserError::Validation("newPassword is required".to_string()));
        }

        let user = self
            .store
            .find_by_email(email)
            .await?
            .ok_or(UserError::NotFound)?;

        let valid = self
            .verify_password(current_password.to_string(), user.password_hash)
            .await?;
        if !valid {
            return Err(UserError::IncorrectPassword);
        }

        let password_hash = self.hash_password(new_password.to_string()).await?;
        if !self.store.set_password_hash(email, &password_hash).await? {
            return Err(UserError::NotFound);
        }

        tracing::info!(user_id = %user.id, "password updated");
        Ok(())
    }

    async fn delete(&self, email: &str) -> Result<User, UserError> {
        self.store.delete(email).await?.ok_or(UserError::NotFound)
    }
}
