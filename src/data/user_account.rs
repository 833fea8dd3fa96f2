use chrono::Utc;
use entity::enums::UserRole;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

/// Queries for the user account table.
pub struct UserAccountRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserAccountRepository<'a, C> {
    /// Creates a new instance of [`UserAccountRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates an active user account
    pub async fn create(
        &self,
        email: &str,
        name: &str,
        role: UserRole,
    ) -> Result<entity::user_account::Model, DbErr> {
        let account = entity::user_account::ActiveModel {
            email: ActiveValue::Set(email.to_string()),
            name: ActiveValue::Set(name.to_string()),
            role: ActiveValue::Set(role),
            is_active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        account.insert(self.db).await
    }

    /// Gets a user account by ID
    pub async fn get(&self, account_id: i32) -> Result<Option<entity::user_account::Model>, DbErr> {
        entity::prelude::UserAccount::find_by_id(account_id)
            .one(self.db)
            .await
    }

    /// Gets a user account by email
    pub async fn get_by_email(
        &self,
        email: &str,
    ) -> Result<Option<entity::user_account::Model>, DbErr> {
        entity::prelude::UserAccount::find()
            .filter(entity::user_account::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    /// Gets the account with the given email, creating it when absent
    ///
    /// An existing account keeps its stored name and role; onboarding never
    /// repurposes someone else's login.
    pub async fn get_or_create(
        &self,
        email: &str,
        name: &str,
        role: UserRole,
    ) -> Result<entity::user_account::Model, DbErr> {
        if let Some(account) = self.get_by_email(email).await? {
            return Ok(account);
        }

        self.create(email, name, role).await
    }
}
