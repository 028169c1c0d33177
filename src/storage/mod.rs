use std::sync::Arc;

use crate::config::AppConfig;
use crate::models::{
    coursework::{
        entities::{Assignment, AssignmentCategory, Submission},
        requests::{CreateAssignmentRequest, CreateCategoryRequest},
    },
    enrollments::entities::Enrollment,
    grades::entities::{ClassGrader, LetterGrade, RecomputeOutcome, Rescore},
    offerings::entities::{ClassOffering, Course, OfferingSlot},
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[cfg(test)]
pub(crate) mod test_support;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 课程与开课方法
    // 通过学科代码和课程编号获取课程
    async fn get_course_by_subject_and_number(
        &self,
        subject: &str,
        number: i32,
    ) -> Result<Option<Course>>;
    // 通过ID获取开课信息
    async fn get_offering_by_id(&self, class_id: i64) -> Result<Option<ClassOffering>>;
    // 列出某学期的全部开课
    async fn list_term_offerings(&self, season: &str, year: i32) -> Result<Vec<ClassOffering>>;
    // 创建开课
    async fn create_offering(&self, course_id: i64, slot: OfferingSlot) -> Result<ClassOffering>;
    // 列出教师讲授的开课及对应课程
    async fn list_instructor_offerings(
        &self,
        instructor_uid: &str,
    ) -> Result<Vec<(ClassOffering, Course)>>;

    /// 作业分类方法
    // 通过班级和名称获取分类
    async fn get_category_by_name(
        &self,
        class_id: i64,
        name: &str,
    ) -> Result<Option<AssignmentCategory>>;
    // 创建分类
    async fn create_category(&self, req: CreateCategoryRequest) -> Result<AssignmentCategory>;
    // 列出班级的分类及其作业（包括没有作业的分类）
    async fn list_class_categories_with_assignments(
        &self,
        class_id: i64,
    ) -> Result<Vec<(AssignmentCategory, Vec<Assignment>)>>;

    /// 作业方法
    // 通过分类和名称获取作业
    async fn get_assignment_by_name(
        &self,
        category_id: i64,
        name: &str,
    ) -> Result<Option<Assignment>>;
    // 创建作业
    async fn create_assignment(
        &self,
        category_id: i64,
        req: CreateAssignmentRequest,
    ) -> Result<Assignment>;

    /// 提交方法
    // 获取学生对某作业的提交
    async fn get_submission(
        &self,
        assignment_id: i64,
        student_uid: &str,
    ) -> Result<Option<Submission>>;
    // 新建或覆盖提交内容（保留已有分数）
    async fn upsert_submission(
        &self,
        assignment_id: i64,
        student_uid: &str,
        contents: &str,
    ) -> Result<Submission>;
    // 更新提交分数
    async fn update_submission_score(
        &self,
        submission_id: i64,
        score: f64,
    ) -> Result<Option<Submission>>;
    // 列出某作业的全部提交
    async fn list_assignment_submissions(&self, assignment_id: i64) -> Result<Vec<Submission>>;
    // 列出学生在若干作业上的提交
    async fn list_student_submissions(
        &self,
        student_uid: &str,
        assignment_ids: &[i64],
    ) -> Result<Vec<Submission>>;

    /// 选课方法
    // 获取选课记录
    async fn get_enrollment(&self, class_id: i64, student_uid: &str)
    -> Result<Option<Enrollment>>;
    // 创建选课记录（成绩为未评定）
    async fn create_enrollment(&self, class_id: i64, student_uid: &str) -> Result<Enrollment>;
    // 列出班级的选课记录
    async fn list_class_enrollments(&self, class_id: i64) -> Result<Vec<Enrollment>>;
    // 列出学生的选课记录
    async fn list_student_enrollments(&self, student_uid: &str) -> Result<Vec<Enrollment>>;
    // 列出学生的选课记录及对应开课和课程
    async fn list_student_classes(
        &self,
        student_uid: &str,
    ) -> Result<Vec<(Enrollment, ClassOffering, Course)>>;

    /// 成绩方法
    // 在一个事务内写入分数（可选）、读取班级成绩快照并写回 grader 算出的字母成绩
    async fn recompute_class_grades(
        &self,
        class_id: i64,
        rescore: Option<Rescore>,
        grader: &ClassGrader,
    ) -> Result<RecomputeOutcome>;
    // 在同一事务中写入班级学生的字母成绩
    async fn update_enrollment_grades(
        &self,
        class_id: i64,
        grades: &[(String, LetterGrade)],
    ) -> Result<u64>;
}

pub async fn create_storage(config: &AppConfig) -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::connect(config).await?;
    Ok(Arc::new(storage))
}
