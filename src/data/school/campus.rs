use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter,
};

/// Queries for the campus table.
pub struct CampusRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CampusRepository<'a, C> {
    /// Creates a new instance of [`CampusRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a campus without a code; code assignment happens afterwards.
    pub async fn create(&self, name: &str, city: &str) -> Result<entity::campus::Model, DbErr> {
        let campus = entity::campus::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            city: ActiveValue::Set(city.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        campus.insert(self.db).await
    }

    /// Gets a campus by ID
    pub async fn get(&self, campus_id: i32) -> Result<Option<entity::campus::Model>, DbErr> {
        entity::prelude::Campus::find_by_id(campus_id)
            .one(self.db)
            .await
    }

    /// Returns true when any campus already holds the given code
    pub async fn code_exists(&self, code: &str) -> Result<bool, DbErr> {
        Ok(entity::prelude::Campus::find()
            .filter(entity::campus::Column::Code.eq(code))
            .one(self.db)
            .await?
            .is_some())
    }

    /// Stamps an assigned code onto a campus
    pub async fn set_code(
        &self,
        campus_id: i32,
        code: &str,
    ) -> Result<Option<entity::campus::Model>, DbErr> {
        let campus = match self.get(campus_id).await? {
            Some(campus) => campus,
            None => return Ok(None),
        };

        let mut campus_am = campus.into_active_model();
        campus_am.code = ActiveValue::Set(Some(code.to_string()));
        campus_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let campus = campus_am.update(self.db).await?;

        Ok(Some(campus))
    }
}
