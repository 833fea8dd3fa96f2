use chrono::Utc;
use entity::enums::Shift;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

/// Queries for the coordinator table.
pub struct CoordinatorRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CoordinatorRepository<'a, C> {
    /// Creates a new instance of [`CoordinatorRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a coordinator without an employee code
    pub async fn create(
        &self,
        campus_id: i32,
        user_account_id: i32,
        name: &str,
        shift: Shift,
    ) -> Result<entity::coordinator::Model, DbErr> {
        let coordinator = entity::coordinator::ActiveModel {
            campus_id: ActiveValue::Set(campus_id),
            user_account_id: ActiveValue::Set(user_account_id),
            name: ActiveValue::Set(name.to_string()),
            shift: ActiveValue::Set(shift),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        coordinator.insert(self.db).await
    }

    /// Gets a coordinator by ID
    pub async fn get(
        &self,
        coordinator_id: i32,
    ) -> Result<Option<entity::coordinator::Model>, DbErr> {
        entity::prelude::Coordinator::find_by_id(coordinator_id)
            .one(self.db)
            .await
    }

    /// Gets the longest-serving coordinator of a campus working the given shift
    pub async fn get_first_by_campus_and_shift(
        &self,
        campus_id: i32,
        shift: Shift,
    ) -> Result<Option<entity::coordinator::Model>, DbErr> {
        entity::prelude::Coordinator::find()
            .filter(entity::coordinator::Column::CampusId.eq(campus_id))
            .filter(entity::coordinator::Column::Shift.eq(shift))
            .order_by_asc(entity::coordinator::Column::Id)
            .one(self.db)
            .await
    }

    /// Returns true when any coordinator already holds the given employee code
    pub async fn employee_code_exists(&self, code: &str) -> Result<bool, DbErr> {
        Ok(entity::prelude::Coordinator::find()
            .filter(entity::coordinator::Column::EmployeeCode.eq(code))
            .one(self.db)
            .await?
            .is_some())
    }

    /// Gets all coordinators that never received an employee code
    pub async fn get_many_missing_code(&self) -> Result<Vec<entity::coordinator::Model>, DbErr> {
        entity::prelude::Coordinator::find()
            .filter(entity::coordinator::Column::EmployeeCode.is_null())
            .all(self.db)
            .await
    }

    /// Stamps an assigned employee code onto a coordinator
    pub async fn set_employee_code(
        &self,
        coordinator_id: i32,
        code: &str,
    ) -> Result<Option<entity::coordinator::Model>, DbErr> {
        let coordinator = match self.get(coordinator_id).await? {
            Some(coordinator) => coordinator,
            None => return Ok(None),
        };

        let mut coordinator_am = coordinator.into_active_model();
        coordinator_am.employee_code = ActiveValue::Set(Some(code.to_string()));
        coordinator_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let coordinator = coordinator_am.update(self.db).await?;

        Ok(Some(coordinator))
    }
}
