//! 作业分类实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "assignment_categories")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub class_id: i64,
    pub name: String,
    pub weight: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::class_offerings::Entity",
        from = "Column::ClassId",
        to = "super::class_offerings::Column::Id"
    )]
    ClassOffering,
    #[sea_orm(has_many = "super::assignments::Entity")]
    Assignments,
}

impl Related<super::class_offerings::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ClassOffering.def()
    }
}

impl Related<super::assignments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Assignments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_category(self) -> crate::models::coursework::entities::AssignmentCategory {
        use crate::models::coursework::entities::AssignmentCategory;

        AssignmentCategory {
            id: self.id,
            class_id: self.class_id,
            name: self.name,
            weight: self.weight,
        }
    }
}
