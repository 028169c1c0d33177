//! 提交存储操作

use super::SeaOrmStorage;
use crate::entity::submissions::{ActiveModel, Column, Entity as Submissions};
use crate::errors::{LmsError, Result};
use crate::models::coursework::entities::Submission;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 获取学生对某作业的提交
    pub async fn get_submission_impl(
        &self,
        assignment_id: i64,
        student_uid: &str,
    ) -> Result<Option<Submission>> {
        let result = Submissions::find()
            .filter(Column::AssignmentId.eq(assignment_id))
            .filter(Column::StudentUid.eq(student_uid))
            .one(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询提交失败: {e}")))?;

        Ok(result.map(|m| m.into_submission()))
    }

    /// 新建或覆盖提交
    ///
    /// 重复提交只替换内容和提交时间，分数保持不变。依赖 (作业, 学生) 唯一键，
    /// 并发的首次提交也只会产生一条记录。
    pub async fn upsert_submission_impl(
        &self,
        assignment_id: i64,
        student_uid: &str,
        contents: &str,
    ) -> Result<Submission> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            assignment_id: Set(assignment_id),
            student_uid: Set(student_uid.to_string()),
            score: Set(0.0),
            contents: Set(contents.to_string()),
            submitted_at: Set(now),
            ..Default::default()
        };

        Submissions::insert(model)
            .on_conflict(
                OnConflict::columns([Column::AssignmentId, Column::StudentUid])
                    .update_columns([Column::Contents, Column::SubmittedAt])
                    .to_owned(),
            )
            .exec(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("保存提交失败: {e}")))?;

        self.get_submission_impl(assignment_id, student_uid)
            .await?
            .ok_or_else(|| LmsError::database_operation("保存提交后未能读取提交记录"))
    }

    /// 更新提交分数
    pub async fn update_submission_score_impl(
        &self,
        submission_id: i64,
        score: f64,
    ) -> Result<Option<Submission>> {
        // 先检查提交是否存在
        let existing = Submissions::find_by_id(submission_id)
            .one(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询提交失败: {e}")))?;
        if existing.is_none() {
            return Ok(None);
        }

        let model = ActiveModel {
            id: Set(submission_id),
            score: Set(score),
            ..Default::default()
        };

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("更新分数失败: {e}")))?;

        Ok(Some(result.into_submission()))
    }

    /// 列出某作业的全部提交，按学生排序
    pub async fn list_assignment_submissions_impl(
        &self,
        assignment_id: i64,
    ) -> Result<Vec<Submission>> {
        let results = Submissions::find()
            .filter(Column::AssignmentId.eq(assignment_id))
            .order_by_asc(Column::StudentUid)
            .all(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询作业提交失败: {e}")))?;

        Ok(results.into_iter().map(|m| m.into_submission()).collect())
    }

    /// 列出学生在若干作业上的提交
    pub async fn list_student_submissions_impl(
        &self,
        student_uid: &str,
        assignment_ids: &[i64],
    ) -> Result<Vec<Submission>> {
        if assignment_ids.is_empty() {
            return Ok(Vec::new());
        }

        let results = Submissions::find()
            .filter(Column::StudentUid.eq(student_uid))
            .filter(Column::AssignmentId.is_in(assignment_ids.to_vec()))
            .order_by_asc(Column::AssignmentId)
            .all(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询学生提交失败: {e}")))?;

        Ok(results.into_iter().map(|m| m.into_submission()).collect())
    }
}
