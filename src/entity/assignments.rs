//! 作业实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "assignments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub category_id: i64,
    pub name: String,
    pub max_points: f64,
    pub due: i64,
    #[sea_orm(column_type = "Text")]
    pub contents: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::assignment_categories::Entity",
        from = "Column::CategoryId",
        to = "super::assignment_categories::Column::Id"
    )]
    Category,
    #[sea_orm(has_many = "super::submissions::Entity")]
    Submissions,
}

impl Related<super::assignment_categories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl Related<super::submissions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Submissions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_assignment(self) -> crate::models::coursework::entities::Assignment {
        use crate::models::coursework::entities::Assignment;
        use chrono::{DateTime, Utc};

        Assignment {
            id: self.id,
            category_id: self.category_id,
            name: self.name,
            max_points: self.max_points,
            due: DateTime::<Utc>::from_timestamp(self.due, 0).unwrap_or_default(),
            contents: self.contents,
        }
    }
}
