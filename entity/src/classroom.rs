use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "classroom")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub grade_id: i32,
    pub section: String,
    #[sea_orm(unique)]
    pub code: Option<String>,
    /// A teacher leads at most one classroom at a time.
    #[sea_orm(unique)]
    pub class_teacher_id: Option<i32>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::grade::Entity",
        from = "Column::GradeId",
        to = "super::grade::Column::Id"
    )]
    Grade,
    #[sea_orm(
        belongs_to = "super::teacher::Entity",
        from = "Column::ClassTeacherId",
        to = "super::teacher::Column::Id"
    )]
    ClassTeacher,
    #[sea_orm(has_many = "super::student::Entity")]
    Student,
}

impl Related<super::grade::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Grade.def()
    }
}

impl Related<super::teacher::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ClassTeacher.def()
    }
}

impl Related<super::student::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
