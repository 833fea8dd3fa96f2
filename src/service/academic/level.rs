use entity::enums::{LevelStage, Shift};
use sea_orm::{DatabaseConnection, DbErr, TransactionTrait};

use crate::data::school::LevelRepository;
use crate::data::staff::CoordinatorRepository;
use crate::error::Error;
use crate::model::db::LevelModel;
use crate::model::dto::NewLevel;
use crate::service::code::CodeService;

/// Creates levels and links them to their campus coordinator.
pub struct LevelService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LevelService<'a> {
    /// Creates a new instance of [`LevelService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a level, assigns its code and links a coordinator in one
    /// transaction.
    ///
    /// The campus coordinator on the same shift picks up new levels
    /// automatically; without one the level is left unassigned until a
    /// coordinator is onboarded for that campus and shift.
    pub async fn create_level(&self, new_level: NewLevel) -> Result<LevelModel, Error> {
        let stage = LevelStage::from_input(&new_level.stage).ok_or_else(|| {
            Error::ParseError(format!("Unknown level stage: {}", new_level.stage))
        })?;
        let shift = Shift::from_input(&new_level.shift)
            .ok_or_else(|| Error::ParseError(format!("Unknown shift: {}", new_level.shift)))?;

        let txn = self.db.begin().await?;

        let levels = LevelRepository::new(&txn);
        let level = levels.create(new_level.campus_id, stage, shift).await?;

        CodeService::new(&txn).assign_level_code(level.id).await?;

        let coordinator = CoordinatorRepository::new(&txn)
            .get_first_by_campus_and_shift(new_level.campus_id, shift)
            .await?;
        if let Some(coordinator) = coordinator {
            levels.set_coordinator(level.id, coordinator.id).await?;
        }

        let level = levels
            .get(level.id)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("Level {} not found", level.id)))?;

        txn.commit().await?;

        Ok(level)
    }
}
