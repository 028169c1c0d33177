//! 选课存储操作

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::class_offerings::Entity as ClassOfferings;
use crate::entity::courses::{Column as CourseColumn, Entity as Courses};
use crate::entity::enrollments::{ActiveModel, Column, Entity as Enrollments};
use crate::errors::{LmsError, Result};
use crate::models::enrollments::entities::{Enrollment, UNGRADED};
use crate::models::offerings::entities::{ClassOffering, Course};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 获取选课记录
    pub async fn get_enrollment_impl(
        &self,
        class_id: i64,
        student_uid: &str,
    ) -> Result<Option<Enrollment>> {
        let result = Enrollments::find()
            .filter(Column::ClassId.eq(class_id))
            .filter(Column::StudentUid.eq(student_uid))
            .one(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询选课记录失败: {e}")))?;

        Ok(result.map(|m| m.into_enrollment()))
    }

    /// 创建选课记录，成绩初始化为未评定
    pub async fn create_enrollment_impl(
        &self,
        class_id: i64,
        student_uid: &str,
    ) -> Result<Enrollment> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            class_id: Set(class_id),
            student_uid: Set(student_uid.to_string()),
            grade: Set(UNGRADED.to_string()),
            enrolled_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("创建选课记录失败: {e}")))?;

        Ok(result.into_enrollment())
    }

    /// 列出班级的选课记录
    pub async fn list_class_enrollments_impl(&self, class_id: i64) -> Result<Vec<Enrollment>> {
        let results = Enrollments::find()
            .filter(Column::ClassId.eq(class_id))
            .order_by_asc(Column::StudentUid)
            .all(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询班级选课失败: {e}")))?;

        Ok(results.into_iter().map(|m| m.into_enrollment()).collect())
    }

    /// 列出学生的选课记录
    pub async fn list_student_enrollments_impl(
        &self,
        student_uid: &str,
    ) -> Result<Vec<Enrollment>> {
        let results = Enrollments::find()
            .filter(Column::StudentUid.eq(student_uid))
            .order_by_asc(Column::ClassId)
            .all(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询学生选课失败: {e}")))?;

        Ok(results.into_iter().map(|m| m.into_enrollment()).collect())
    }

    /// 列出学生的选课记录，连同开课和课程信息
    pub async fn list_student_classes_impl(
        &self,
        student_uid: &str,
    ) -> Result<Vec<(Enrollment, ClassOffering, Course)>> {
        let rows = Enrollments::find()
            .filter(Column::StudentUid.eq(student_uid))
            .order_by_asc(Column::ClassId)
            .find_also_related(ClassOfferings)
            .all(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询学生课程失败: {e}")))?;

        let course_ids: Vec<i64> = rows
            .iter()
            .filter_map(|(_, offering)| offering.as_ref().map(|o| o.course_id))
            .collect();
        if course_ids.is_empty() {
            return Ok(Vec::new());
        }

        let courses: HashMap<i64, Course> = Courses::find()
            .filter(CourseColumn::Id.is_in(course_ids))
            .all(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询课程失败: {e}")))?
            .into_iter()
            .map(|c| (c.id, c.into_course()))
            .collect();

        Ok(rows
            .into_iter()
            .filter_map(|(enrollment, offering)| {
                let offering = offering?;
                let course = courses.get(&offering.course_id)?.clone();
                Some((
                    enrollment.into_enrollment(),
                    offering.into_offering(),
                    course,
                ))
            })
            .collect())
    }
}
