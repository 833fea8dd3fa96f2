use chrono::Utc;
use entity::enums::{LevelStage, Shift};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter,
};

/// Queries for the level table.
pub struct LevelRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> LevelRepository<'a, C> {
    /// Creates a new instance of [`LevelRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a level without a code or coordinator
    pub async fn create(
        &self,
        campus_id: i32,
        stage: LevelStage,
        shift: Shift,
    ) -> Result<entity::level::Model, DbErr> {
        let level = entity::level::ActiveModel {
            campus_id: ActiveValue::Set(campus_id),
            stage: ActiveValue::Set(stage),
            shift: ActiveValue::Set(shift),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        level.insert(self.db).await
    }

    /// Gets a level by ID
    pub async fn get(&self, level_id: i32) -> Result<Option<entity::level::Model>, DbErr> {
        entity::prelude::Level::find_by_id(level_id)
            .one(self.db)
            .await
    }

    /// Gets the levels of a campus and shift that have no coordinator yet
    pub async fn get_many_unassigned_by_campus_and_shift(
        &self,
        campus_id: i32,
        shift: Shift,
    ) -> Result<Vec<entity::level::Model>, DbErr> {
        entity::prelude::Level::find()
            .filter(entity::level::Column::CampusId.eq(campus_id))
            .filter(entity::level::Column::Shift.eq(shift))
            .filter(entity::level::Column::CoordinatorId.is_null())
            .all(self.db)
            .await
    }

    /// Stamps an assigned code onto a level
    pub async fn set_code(
        &self,
        level_id: i32,
        code: &str,
    ) -> Result<Option<entity::level::Model>, DbErr> {
        let level = match self.get(level_id).await? {
            Some(level) => level,
            None => return Ok(None),
        };

        let mut level_am = level.into_active_model();
        level_am.code = ActiveValue::Set(Some(code.to_string()));
        level_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let level = level_am.update(self.db).await?;

        Ok(Some(level))
    }

    /// Links a coordinator to a level
    pub async fn set_coordinator(
        &self,
        level_id: i32,
        coordinator_id: i32,
    ) -> Result<Option<entity::level::Model>, DbErr> {
        let level = match self.get(level_id).await? {
            Some(level) => level,
            None => return Ok(None),
        };

        let mut level_am = level.into_active_model();
        level_am.coordinator_id = ActiveValue::Set(Some(coordinator_id));
        level_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let level = level_am.update(self.db).await?;

        Ok(Some(level))
    }
}
