use entity::enums::{Shift, UserRole};
use sea_orm::{DatabaseConnection, DbErr, TransactionTrait};

use crate::data::school::LevelRepository;
use crate::data::staff::CoordinatorRepository;
use crate::data::user_account::UserAccountRepository;
use crate::error::Error;
use crate::model::db::CoordinatorModel;
use crate::model::dto::NewStaffMember;
use crate::service::code::CodeService;
use crate::service::retry::RetryContext;

/// Onboards coordinators.
pub struct CoordinatorService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CoordinatorService<'a> {
    /// Creates a new instance of [`CoordinatorService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Onboards a coordinator: account, coordinator row and employee code in
    /// one transaction, retried on transient database errors.
    ///
    /// Levels on the same campus and shift that have no coordinator yet are
    /// adopted by the new coordinator.
    pub async fn create_coordinator(
        &self,
        new_coordinator: NewStaffMember,
    ) -> Result<CoordinatorModel, Error> {
        let shift = Shift::from_input(&new_coordinator.shift).ok_or_else(|| {
            Error::ParseError(format!("Unknown shift: {}", new_coordinator.shift))
        })?;

        RetryContext::new()
            .execute_with_retry("create coordinator", || {
                self.try_create_coordinator(&new_coordinator, shift)
            })
            .await
    }

    async fn try_create_coordinator(
        &self,
        new_coordinator: &NewStaffMember,
        shift: Shift,
    ) -> Result<CoordinatorModel, Error> {
        let txn = self.db.begin().await?;

        let account = UserAccountRepository::new(&txn)
            .get_or_create(
                &new_coordinator.email,
                &new_coordinator.name,
                UserRole::Coordinator,
            )
            .await?;

        let coordinators = CoordinatorRepository::new(&txn);
        let coordinator = coordinators
            .create(
                new_coordinator.campus_id,
                account.id,
                &new_coordinator.name,
                shift,
            )
            .await?;

        CodeService::new(&txn)
            .assign_coordinator_code(coordinator.id)
            .await?;

        let levels = LevelRepository::new(&txn);
        for level in levels
            .get_many_unassigned_by_campus_and_shift(new_coordinator.campus_id, shift)
            .await?
        {
            levels.set_coordinator(level.id, coordinator.id).await?;
        }

        let coordinator = coordinators.get(coordinator.id).await?.ok_or_else(|| {
            DbErr::RecordNotFound(format!("Coordinator {} not found", coordinator.id))
        })?;

        txn.commit().await?;

        Ok(coordinator)
    }
}
