use sea_orm::entity::prelude::*;

/// Audit record of a registration code rewrite.
///
/// Written exactly once per approved transfer; the unique constraint on
/// `transfer_request_id` enforces that at the schema level.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "id_history")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub transfer_request_id: i32,
    pub student_id: Option<i32>,
    pub teacher_id: Option<i32>,
    pub old_code: String,
    pub new_code: String,
    pub old_campus_code: String,
    pub new_campus_code: String,
    pub old_shift_code: String,
    pub new_shift_code: String,
    pub old_year_code: String,
    pub new_year_code: String,
    pub old_role_code: Option<String>,
    pub new_role_code: Option<String>,
    /// Sequence digits carried over verbatim from the old code.
    pub suffix: String,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::transfer_request::Entity",
        from = "Column::TransferRequestId",
        to = "super::transfer_request::Column::Id"
    )]
    TransferRequest,
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
}

impl Related<super::transfer_request::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TransferRequest.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
