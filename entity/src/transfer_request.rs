use sea_orm::entity::prelude::*;

use super::enums::{Shift, TransferStatus, TransferSubject};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "transfer_request")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub subject_type: TransferSubject,
    /// Exactly one of `student_id` / `teacher_id` is set, matching `subject_type`.
    pub student_id: Option<i32>,
    pub teacher_id: Option<i32>,
    pub from_campus_id: i32,
    pub to_campus_id: i32,
    pub from_shift: Shift,
    pub to_shift: Shift,
    pub reason: String,
    pub status: TransferStatus,
    pub requested_by: i32,
    pub decided_by: Option<i32>,
    pub decided_at: Option<DateTime>,
    /// Reviewer note; required (or defaulted) on decline, optional on approval.
    pub decision_note: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::student::Entity",
        from = "Column::StudentId",
        to = "super::student::Column::Id"
    )]
    Student,
    #[sea_orm(
        belongs_to = "super::teacher::Entity",
        from = "Column::TeacherId",
        to = "super::teacher::Column::Id"
    )]
    Teacher,
    #[sea_orm(
        belongs_to = "super::campus::Entity",
        from = "Column::FromCampusId",
        to = "super::campus::Column::Id"
    )]
    FromCampus,
    #[sea_orm(
        belongs_to = "super::campus::Entity",
        from = "Column::ToCampusId",
        to = "super::campus::Column::Id"
    )]
    ToCampus,
    #[sea_orm(
        belongs_to = "super::user_account::Entity",
        from = "Column::RequestedBy",
        to = "super::user_account::Column::Id"
    )]
    Requester,
    #[sea_orm(
        belongs_to = "super::user_account::Entity",
        from = "Column::DecidedBy",
        to = "super::user_account::Column::Id"
    )]
    Approver,
    #[sea_orm(has_one = "super::id_history::Entity")]
    IdHistory,
}

impl Related<super::id_history::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::IdHistory.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
