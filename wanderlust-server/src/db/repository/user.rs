//! User Repository

use serde::Serialize;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult, strip_table_prefix};
use crate::db::models::User;
use shared::client::ProfileUpdate;

const TABLE: &str = "user";

#[derive(Clone)]
pub struct UserRepository {
    base: BaseRepository,
}

impl UserRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find user by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<User>> {
        let pure_id = strip_table_prefix(TABLE, id);
        let user: Option<User> = self.base.db().select((TABLE, pure_id)).await?;
        Ok(user)
    }

    /// Find user by email
    pub async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        let email_owned = email.to_string();
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM user WHERE email = $email LIMIT 1")
            .bind(("email", email_owned))
            .await?;
        let users: Vec<User> = result.take(0)?;
        Ok(users.into_iter().next())
    }

    /// Create a new user
    ///
    /// The caller supplies an already-hashed password; plaintext never
    /// reaches this layer.
    pub async fn create(&self, user: User) -> RepoResult<User> {
        // Check duplicate email (the unique index also guards the race window)
        if self.find_by_email(&user.email).await?.is_some() {
            return Err(RepoError::Duplicate(format!(
                "Email '{}' already exists",
                user.email
            )));
        }

        let created: Option<User> = self.base.db().create(TABLE).content(user).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create user".to_string()))
    }

    /// Update editable profile fields (name, hometown, dob)
    ///
    /// Email, role and the password hash are deliberately untouchable here.
    pub async fn update_profile(&self, id: &str, data: ProfileUpdate) -> RepoResult<User> {
        // Local merge shape: absent fields must not be nulled out
        #[derive(Serialize)]
        struct ProfileMerge {
            #[serde(skip_serializing_if = "Option::is_none")]
            name: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            hometown: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            dob: Option<String>,
        }

        let merge = ProfileMerge {
            name: data.name,
            hometown: data.hometown,
            dob: data.dob,
        };

        let pure_id = strip_table_prefix(TABLE, id).to_string();
        let updated: Option<User> = self
            .base
            .db()
            .update((TABLE, pure_id.as_str()))
            .merge(merge)
            .await?;

        updated.ok_or_else(|| RepoError::NotFound(format!("User {} not found", id)))
    }
}
