//! User factory for creating test login accounts.
//!
//! The default password hash is a placeholder that never verifies; tests exercising
//! login set a real hash through `password_hash()`.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let user = UserFactory::new(&db, clinic.id)
///     .email("doctor@clinic.test")
///     .role("PROFESSIONAL")
///     .active(false)
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    clinic_id: i32,
    name: String,
    email: String,
    password_hash: String,
    role: String,
    active: bool,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - name: `"User {id}"`
    /// - email: `"user{id}@example.test"`
    /// - password_hash: `"not-a-hash"`
    /// - role: `"ADMIN"`
    /// - active: `true`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `clinic_id` - Owning clinic
    pub fn new(db: &'a DatabaseConnection, clinic_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            clinic_id,
            name: format!("User {}", id),
            email: format!("user{}@example.test", id),
            password_hash: "not-a-hash".to_string(),
            role: "ADMIN".to_string(),
            active: true,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the stored PHC password hash.
    pub fn password_hash(mut self, password_hash: impl Into<String>) -> Self {
        self.password_hash = password_hash.into();
        self
    }

    /// Sets the role, `ADMIN` or `PROFESSIONAL`.
    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            clinic_id: ActiveValue::Set(self.clinic_id),
            name: ActiveValue::Set(self.name),
            email: ActiveValue::Set(self.email),
            password_hash: ActiveValue::Set(self.password_hash),
            role: ActiveValue::Set(self.role),
            active: ActiveValue::Set(self.active),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with default values.
pub async fn create_user(
    db: &DatabaseConnection,
    clinic_id: i32,
) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db, clinic_id).build().await
}

/// Creates an active `ADMIN` user for the clinic.
pub async fn create_admin(
    db: &DatabaseConnection,
    clinic_id: i32,
) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db, clinic_id).role("ADMIN").build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{builder::TestBuilder, factory::clinic::create_clinic};

    #[tokio::test]
    async fn creates_user_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_user_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let clinic = create_clinic(db).await?;
        let user = create_user(db, clinic.id).await?;

        assert_eq!(user.clinic_id, clinic.id);
        assert_eq!(user.role, "ADMIN");
        assert!(user.active);

        Ok(())
    }

    #[tokio::test]
    async fn creates_user_with_custom_values() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_user_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let clinic = create_clinic(db).await?;
        let user = UserFactory::new(db, clinic.id)
            .name("Dra. Ana")
            .email("ana@clinic.test")
            .role("PROFESSIONAL")
            .active(false)
            .build()
            .await?;

        assert_eq!(user.name, "Dra. Ana");
        assert_eq!(user.email, "ana@clinic.test");
        assert_eq!(user.role, "PROFESSIONAL");
        assert!(!user.active);

        Ok(())
    }

    #[tokio::test]
    async fn creates_multiple_unique_users() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_user_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let clinic = create_clinic(db).await?;
        let first = create_user(db, clinic.id).await?;
        let second = create_user(db, clinic.id).await?;

        assert_ne!(first.email, second.email);

        Ok(())
    }
}
