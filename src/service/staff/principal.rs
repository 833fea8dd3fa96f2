use entity::enums::{Shift, UserRole};
use sea_orm::{DatabaseConnection, DbErr, TransactionTrait};

use crate::data::staff::PrincipalRepository;
use crate::data::user_account::UserAccountRepository;
use crate::error::Error;
use crate::model::db::PrincipalModel;
use crate::model::dto::NewStaffMember;
use crate::service::code::CodeService;
use crate::service::retry::RetryContext;

/// Onboards principals.
pub struct PrincipalService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PrincipalService<'a> {
    /// Creates a new instance of [`PrincipalService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Onboards a principal: account, principal row and employee code in one
    /// transaction, retried on transient database errors.
    ///
    /// A campus holds at most one principal; a second insert fails on the
    /// unique campus constraint.
    pub async fn create_principal(
        &self,
        new_principal: NewStaffMember,
    ) -> Result<PrincipalModel, Error> {
        let shift = Shift::from_input(&new_principal.shift)
            .ok_or_else(|| Error::ParseError(format!("Unknown shift: {}", new_principal.shift)))?;

        RetryContext::new()
            .execute_with_retry("create principal", || {
                self.try_create_principal(&new_principal, shift)
            })
            .await
    }

    async fn try_create_principal(
        &self,
        new_principal: &NewStaffMember,
        shift: Shift,
    ) -> Result<PrincipalModel, Error> {
        let txn = self.db.begin().await?;

        let account = UserAccountRepository::new(&txn)
            .get_or_create(
                &new_principal.email,
                &new_principal.name,
                UserRole::Principal,
            )
            .await?;

        let principals = PrincipalRepository::new(&txn);
        let principal = principals
            .create(
                new_principal.campus_id,
                account.id,
                &new_principal.name,
                shift,
            )
            .await?;

        CodeService::new(&txn)
            .assign_principal_code(principal.id)
            .await?;

        let principal = principals.get(principal.id).await?.ok_or_else(|| {
            DbErr::RecordNotFound(format!("Principal {} not found", principal.id))
        })?;

        txn.commit().await?;

        Ok(principal)
    }
}
