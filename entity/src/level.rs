use sea_orm::entity::prelude::*;

use super::enums::{LevelStage, Shift};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "level")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub campus_id: i32,
    pub stage: LevelStage,
    pub shift: Shift,
    #[sea_orm(unique)]
    pub code: Option<String>,
    pub coordinator_id: Option<i32>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::campus::Entity",
        from = "Column::CampusId",
        to = "super::campus::Column::Id"
    )]
    Campus,
    #[sea_orm(
        belongs_to = "super::coordinator::Entity",
        from = "Column::CoordinatorId",
        to = "super::coordinator::Column::Id"
    )]
    Coordinator,
    #[sea_orm(has_many = "super::grade::Entity")]
    Grade,
}

impl Related<super::campus::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Campus.def()
    }
}

impl Related<super::coordinator::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Coordinator.def()
    }
}

impl Related<super::grade::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Grade.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
