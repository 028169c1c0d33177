pub mod assignments;
pub mod categories;
pub mod grading;
pub mod list;
pub mod submissions;
pub mod submit;

use std::sync::Arc;

use crate::errors::{LmsError, Result};
use crate::models::coursework::{
    entities::{Assignment, AssignmentCategory, Submission},
    requests::{
        CreateAssignmentRequest, CreateCategoryRequest, GradeSubmissionRequest,
        SubmitAssignmentRequest,
    },
    responses::StudentAssignmentItem,
};
use crate::services::grades::GradeService;
use crate::storage::Storage;

pub struct CourseworkService {
    storage: Arc<dyn Storage>,
    // 评分后由成绩服务负责重算
    grades: Arc<GradeService>,
}

impl CourseworkService {
    pub fn new(storage: Arc<dyn Storage>, grades: Arc<GradeService>) -> Self {
        Self { storage, grades }
    }

    pub(crate) fn get_storage(&self) -> Arc<dyn Storage> {
        self.storage.clone()
    }

    // 创建作业分类
    pub async fn create_category(&self, req: CreateCategoryRequest) -> Result<AssignmentCategory> {
        categories::create_category(self, req).await
    }

    // 在分类下创建作业
    pub async fn create_assignment(&self, req: CreateAssignmentRequest) -> Result<Assignment> {
        assignments::create_assignment(self, req).await
    }

    // 学生提交或重新提交作业
    pub async fn submit_assignment(&self, req: SubmitAssignmentRequest) -> Result<Submission> {
        submit::submit_assignment(self, req).await
    }

    // 教师评分，评分后重算全班成绩
    pub async fn grade_submission(&self, req: GradeSubmissionRequest) -> Result<Submission> {
        grading::grade_submission(self, req).await
    }

    // 某作业的全部提交
    pub async fn list_assignment_submissions(
        &self,
        class_id: i64,
        category: &str,
        assignment: &str,
    ) -> Result<Vec<Submission>> {
        submissions::list_assignment_submissions(self, class_id, category, assignment).await
    }

    // 学生在班级内的作业列表及得分
    pub async fn list_student_assignments(
        &self,
        class_id: i64,
        student_uid: &str,
    ) -> Result<Vec<StudentAssignmentItem>> {
        list::list_student_assignments(self, class_id, student_uid).await
    }
}

/// 按 (班级, 分类名, 作业名) 定位作业
pub(crate) async fn find_assignment(
    storage: &dyn Storage,
    class_id: i64,
    category: &str,
    assignment: &str,
) -> Result<Assignment> {
    let category = storage
        .get_category_by_name(class_id, category)
        .await?
        .ok_or_else(|| LmsError::not_found(format!("Category '{category}' does not exist.")))?;

    storage
        .get_assignment_by_name(category.id, assignment)
        .await?
        .ok_or_else(|| LmsError::not_found(format!("Assignment '{assignment}' does not exist.")))
}
