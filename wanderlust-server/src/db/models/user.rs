//! User Model

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// User ID type
pub type UserId = RecordId;

/// User record as stored
///
/// `password` holds the argon2 PHC hash string, never a plaintext password.
/// The hash stays inside the db layer: API responses are built from
/// `shared::models::User`, which has no password field at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<UserId>,
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(default = "default_role")]
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hometown: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dob: Option<String>,
}

fn default_role() -> String {
    "user".to_string()
}

impl User {
    /// Verify password using argon2
    pub fn verify_password(&self, password: &str) -> Result<bool, argon2::password_hash::Error> {
        use argon2::{
            Argon2,
            password_hash::{PasswordHash, PasswordVerifier},
        };

        let parsed_hash = PasswordHash::new(&self.password)?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }

    /// Hash password using argon2
    pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
        use argon2::{
            Argon2,
            password_hash::{PasswordHasher, SaltString, rand_core::OsRng},
        };

        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();
        let password_hash = argon2.hash_password(password.as_bytes(), &salt)?;
        Ok(password_hash.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify_roundtrip() {
        let hash = User::hash_password("hunter2").unwrap();
        let user = User {
            id: None,
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            password: hash,
            role: "user".to_string(),
            hometown: None,
            dob: None,
        };
        assert!(user.verify_password("hunter2").unwrap());
        assert!(!user.verify_password("hunter3").unwrap());
    }

    #[test]
    fn hashes_are_salted() {
        // Same input must not produce the same PHC string twice
        let a = User::hash_password("secret").unwrap();
        let b = User::hash_password("secret").unwrap();
        assert_ne!(a, b);
    }
}
