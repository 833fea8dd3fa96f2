use chrono::Utc;
use entity::enums::Shift;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter,
};

/// Queries for the principal table.
pub struct PrincipalRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PrincipalRepository<'a, C> {
    /// Creates a new instance of [`PrincipalRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a principal without an employee code
    ///
    /// The campus foreign key is unique, so a second principal on the same campus
    /// is rejected by the database.
    pub async fn create(
        &self,
        campus_id: i32,
        user_account_id: i32,
        name: &str,
        shift: Shift,
    ) -> Result<entity::principal::Model, DbErr> {
        let principal = entity::principal::ActiveModel {
            campus_id: ActiveValue::Set(campus_id),
            user_account_id: ActiveValue::Set(user_account_id),
            name: ActiveValue::Set(name.to_string()),
            shift: ActiveValue::Set(shift),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        principal.insert(self.db).await
    }

    /// Gets a principal by ID
    pub async fn get(&self, principal_id: i32) -> Result<Option<entity::principal::Model>, DbErr> {
        entity::prelude::Principal::find_by_id(principal_id)
            .one(self.db)
            .await
    }

    /// Gets the principal of a campus
    pub async fn get_by_campus_id(
        &self,
        campus_id: i32,
    ) -> Result<Option<entity::principal::Model>, DbErr> {
        entity::prelude::Principal::find()
            .filter(entity::principal::Column::CampusId.eq(campus_id))
            .one(self.db)
            .await
    }

    /// Returns true when any principal already holds the given employee code
    pub async fn employee_code_exists(&self, code: &str) -> Result<bool, DbErr> {
        Ok(entity::prelude::Principal::find()
            .filter(entity::principal::Column::EmployeeCode.eq(code))
            .one(self.db)
            .await?
            .is_some())
    }

    /// Gets all principals that never received an employee code
    pub async fn get_many_missing_code(&self) -> Result<Vec<entity::principal::Model>, DbErr> {
        entity::prelude::Principal::find()
            .filter(entity::principal::Column::EmployeeCode.is_null())
            .all(self.db)
            .await
    }

    /// Stamps an assigned employee code onto a principal
    pub async fn set_employee_code(
        &self,
        principal_id: i32,
        code: &str,
    ) -> Result<Option<entity::principal::Model>, DbErr> {
        let principal = match self.get(principal_id).await? {
            Some(principal) => principal,
            None => return Ok(None),
        };

        let mut principal_am = principal.into_active_model();
        principal_am.employee_code = ActiveValue::Set(Some(code.to_string()));
        principal_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let principal = principal_am.update(self.db).await?;

        Ok(Some(principal))
    }
}
