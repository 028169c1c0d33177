//! 开课实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "class_offerings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub course_id: i64,
    pub season: String,
    pub year: i32,
    pub location: String,
    // 距午夜的秒数
    pub start_time: i32,
    pub end_time: i32,
    pub instructor_uid: String,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::courses::Entity",
        from = "Column::CourseId",
        to = "super::courses::Column::Id"
    )]
    Course,
    #[sea_orm(has_many = "super::assignment_categories::Entity")]
    AssignmentCategories,
    #[sea_orm(has_many = "super::enrollments::Entity")]
    Enrollments,
}

impl Related<super::courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl Related<super::assignment_categories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AssignmentCategories.def()
    }
}

impl Related<super::enrollments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Enrollments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// 时间转换为距午夜的秒数
pub fn time_to_seconds(time: chrono::NaiveTime) -> i32 {
    use chrono::Timelike;
    time.num_seconds_from_midnight() as i32
}

fn seconds_to_time(seconds: i32) -> chrono::NaiveTime {
    chrono::NaiveTime::from_num_seconds_from_midnight_opt(seconds.max(0) as u32, 0)
        .unwrap_or_default()
}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_offering(self) -> crate::models::offerings::entities::ClassOffering {
        use crate::models::offerings::entities::{ClassOffering, OfferingSlot};
        use chrono::{DateTime, Utc};

        ClassOffering {
            id: self.id,
            course_id: self.course_id,
            slot: OfferingSlot {
                season: self.season,
                year: self.year,
                location: self.location,
                start_time: seconds_to_time(self.start_time),
                end_time: seconds_to_time(self.end_time),
                instructor_uid: self.instructor_uid,
            },
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
        }
    }
}
