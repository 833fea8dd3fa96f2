use chrono::Utc;
use entity::enums::{LevelStage, Shift};
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    error::TestError,
    model::{CampusModel, ClassroomModel, GlobalCounterModel, GradeModel, LevelModel},
    TestSetup,
};

impl TestSetup {
    pub fn school<'a>(&'a mut self) -> SchoolFixtures<'a> {
        SchoolFixtures { setup: self }
    }
}

pub struct SchoolFixtures<'a> {
    setup: &'a mut TestSetup,
}

impl<'a> SchoolFixtures<'a> {
    /// Campus names are unique, so each test must pick a distinct one.
    pub async fn insert_campus(&self, name: &str, city: &str) -> Result<CampusModel, TestError> {
        Ok(entity::prelude::Campus::insert(entity::campus::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            city: ActiveValue::Set(city.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    /// Inserts a campus with an explicit id, for tests that assert on the
    /// campus number segment of generated codes.
    pub async fn insert_campus_with_id(
        &self,
        campus_id: i32,
        name: &str,
        city: &str,
    ) -> Result<CampusModel, TestError> {
        Ok(entity::prelude::Campus::insert(entity::campus::ActiveModel {
            id: ActiveValue::Set(campus_id),
            name: ActiveValue::Set(name.to_string()),
            city: ActiveValue::Set(city.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    /// Inserts a campus that already carries a code, bypassing generation.
    pub async fn insert_campus_with_code(
        &self,
        name: &str,
        city: &str,
        code: &str,
    ) -> Result<CampusModel, TestError> {
        Ok(entity::prelude::Campus::insert(entity::campus::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            city: ActiveValue::Set(city.to_string()),
            code: ActiveValue::Set(Some(code.to_string())),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    pub async fn insert_level(
        &self,
        campus_id: i32,
        stage: LevelStage,
        shift: Shift,
    ) -> Result<LevelModel, TestError> {
        Ok(entity::prelude::Level::insert(entity::level::ActiveModel {
            campus_id: ActiveValue::Set(campus_id),
            stage: ActiveValue::Set(stage),
            shift: ActiveValue::Set(shift),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    pub async fn insert_grade(&self, level_id: i32, name: &str) -> Result<GradeModel, TestError> {
        Ok(entity::prelude::Grade::insert(entity::grade::ActiveModel {
            level_id: ActiveValue::Set(level_id),
            name: ActiveValue::Set(name.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    pub async fn insert_classroom(
        &self,
        grade_id: i32,
        section: &str,
    ) -> Result<ClassroomModel, TestError> {
        Ok(
            entity::prelude::Classroom::insert(entity::classroom::ActiveModel {
                grade_id: ActiveValue::Set(grade_id),
                section: ActiveValue::Set(section.to_string()),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                updated_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Seeds a sequence counter at an arbitrary value.
    pub async fn insert_counter(
        &self,
        key: &str,
        value: i64,
    ) -> Result<GlobalCounterModel, TestError> {
        Ok(
            entity::prelude::GlobalCounter::insert(entity::global_counter::ActiveModel {
                key: ActiveValue::Set(key.to_string()),
                value: ActiveValue::Set(value),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
