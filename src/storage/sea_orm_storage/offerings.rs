//! 课程与开课存储操作

use super::SeaOrmStorage;
use crate::entity::class_offerings::{
    ActiveModel, Column, Entity as ClassOfferings, time_to_seconds,
};
use crate::entity::courses::{Column as CourseColumn, Entity as Courses};
use crate::errors::{LmsError, Result};
use crate::models::offerings::entities::{ClassOffering, Course, OfferingSlot};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 通过学科代码和课程编号获取课程
    pub async fn get_course_by_subject_and_number_impl(
        &self,
        subject: &str,
        number: i32,
    ) -> Result<Option<Course>> {
        let result = Courses::find()
            .filter(CourseColumn::Subject.eq(subject))
            .filter(CourseColumn::Number.eq(number))
            .one(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询课程失败: {e}")))?;

        Ok(result.map(|m| m.into_course()))
    }

    /// 通过 ID 获取开课
    pub async fn get_offering_by_id_impl(&self, class_id: i64) -> Result<Option<ClassOffering>> {
        let result = ClassOfferings::find_by_id(class_id)
            .one(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询开课失败: {e}")))?;

        Ok(result.map(|m| m.into_offering()))
    }

    /// 列出某学期的全部开课
    pub async fn list_term_offerings_impl(
        &self,
        season: &str,
        year: i32,
    ) -> Result<Vec<ClassOffering>> {
        let results = ClassOfferings::find()
            .filter(Column::Season.eq(season))
            .filter(Column::Year.eq(year))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询学期开课失败: {e}")))?;

        Ok(results.into_iter().map(|m| m.into_offering()).collect())
    }

    /// 创建开课
    pub async fn create_offering_impl(
        &self,
        course_id: i64,
        slot: OfferingSlot,
    ) -> Result<ClassOffering> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            course_id: Set(course_id),
            season: Set(slot.season),
            year: Set(slot.year),
            location: Set(slot.location),
            start_time: Set(time_to_seconds(slot.start_time)),
            end_time: Set(time_to_seconds(slot.end_time)),
            instructor_uid: Set(slot.instructor_uid),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("创建开课失败: {e}")))?;

        Ok(result.into_offering())
    }

    /// 列出教师讲授的开课，按学期和 ID 排序
    pub async fn list_instructor_offerings_impl(
        &self,
        instructor_uid: &str,
    ) -> Result<Vec<(ClassOffering, Course)>> {
        let rows = ClassOfferings::find()
            .filter(Column::InstructorUid.eq(instructor_uid))
            .order_by_asc(Column::Year)
            .order_by_asc(Column::Id)
            .find_also_related(Courses)
            .all(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询教师开课失败: {e}")))?;

        Ok(rows
            .into_iter()
            .filter_map(|(offering, course)| {
                course.map(|c| (offering.into_offering(), c.into_course()))
            })
            .collect())
    }
}
