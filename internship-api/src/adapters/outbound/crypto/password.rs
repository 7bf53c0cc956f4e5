use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, SaltString},
    Argon2, PasswordHasher as _, PasswordVerifier,
};

use crate::domain::{ports::outbound::PasswordHasher, UserError};

/// Argon2id hashing with the crate's default parameters, stored as PHC strings.
#[derive(Default)]
pub struct Argon2PasswordHasher {
    argon2: Argon2<'static>,
}

impl Argon2PasswordHasher {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PasswordHasher for Argon2PasswordHasher {
    fn hash(&self, password: &str) -> Result<String, UserError> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = self
            .argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|err| UserError::Hashing(err.to_string()))?;

        Ok(hash.to_string())
    }

    fn verify(&self, password: &str, password_hash: &str) -> Result<bool, UserError> {
        let parsed =
            PasswordHash::new(password_hash).map_err(|err| UserError::Hashing(err.to_string()))?;

        match self.argon2.verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(err) => Err(UserError::Hashing(err.to_string())),
        }
    }
}
