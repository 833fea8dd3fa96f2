//! Campus management.

use sea_orm::{DatabaseConnection, DbErr, TransactionTrait};

use crate::data::school::CampusRepository;
use crate::error::code::CodeError;
use crate::error::Error;
use crate::model::db::CampusModel;
use crate::model::dto::NewCampus;
use crate::service::code::CodeService;

/// Creates campuses and assigns their stored codes.
pub struct CampusService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CampusService<'a> {
    /// Creates a new instance of [`CampusService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a campus and assigns its code in one transaction.
    ///
    /// When every suffix draw clashes the campus is kept without a code and a
    /// warning is logged; [`CodeService::assign_campus_code`] picks it up later.
    pub async fn create_campus(&self, new_campus: NewCampus) -> Result<CampusModel, Error> {
        let txn = self.db.begin().await?;

        let campus = CampusRepository::new(&txn)
            .create(&new_campus.name, &new_campus.city)
            .await?;

        match CodeService::new(&txn).assign_campus_code(campus.id).await {
            Ok(_) => (),
            Err(Error::CodeError(CodeError::CampusCodeExhausted { attempts, .. })) => {
                tracing::warn!(
                    "No free code found for campus {} after {} attempts, leaving it uncoded",
                    campus.id,
                    attempts
                );
            }
            Err(error) => return Err(error),
        }

        let campus = CampusRepository::new(&txn)
            .get(campus.id)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("Campus {} not found", campus.id)))?;

        txn.commit().await?;

        Ok(campus)
    }
}
