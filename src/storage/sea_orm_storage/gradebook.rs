//! 成绩快照与成绩写回

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::assignment_categories::{
    Column as CategoryColumn, Entity as AssignmentCategories,
};
use crate::entity::assignments::{Column as AssignmentColumn, Entity as Assignments};
use crate::entity::enrollments::{Column as EnrollmentColumn, Entity as Enrollments};
use crate::entity::submissions::{
    ActiveModel as SubmissionActiveModel, Column as SubmissionColumn, Entity as Submissions,
};
use crate::errors::{LmsError, Result};
use crate::models::grades::entities::{
    ClassGrader, Gradebook, GradebookAssignment, GradebookCategory, LetterGrade,
    RecomputeOutcome, Rescore,
};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use tracing::debug;

impl SeaOrmStorage {
    /// 在同一事务中写回班级学生的字母成绩
    pub async fn update_enrollment_grades_impl(
        &self,
        class_id: i64,
        grades: &[(String, LetterGrade)],
    ) -> Result<u64> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| LmsError::database_operation(format!("开启事务失败: {e}")))?;

        let updated = write_grades(&txn, class_id, grades).await?;

        txn.commit()
            .await
            .map_err(|e| LmsError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(updated)
    }

    /// 写入分数（可选）、读取快照、计算并写回成绩，全部在一个事务内完成
    pub async fn recompute_class_grades_impl(
        &self,
        class_id: i64,
        rescore: Option<Rescore>,
        grader: &ClassGrader,
    ) -> Result<RecomputeOutcome> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| LmsError::database_operation(format!("开启事务失败: {e}")))?;

        // 先写分数，SQLite 上同时拿到写锁
        let rescored = match rescore {
            Some(rescore) => {
                let existing = Submissions::find_by_id(rescore.submission_id)
                    .one(&txn)
                    .await
                    .map_err(|e| LmsError::database_operation(format!("查询提交失败: {e}")))?;
                if existing.is_none() {
                    return Err(LmsError::not_found("Submission does not exist."));
                }

                let model = SubmissionActiveModel {
                    id: Set(rescore.submission_id),
                    score: Set(rescore.score),
                    ..Default::default()
                };
                let updated = model
                    .update(&txn)
                    .await
                    .map_err(|e| LmsError::database_operation(format!("更新分数失败: {e}")))?;
                Some(updated.into_submission())
            }
            None => None,
        };

        let gradebook = read_gradebook(&txn, class_id).await?;
        let grades = grader(&gradebook);
        let updated = write_grades(&txn, class_id, &grades).await?;

        txn.commit()
            .await
            .map_err(|e| LmsError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(RecomputeOutcome {
            rescored,
            enrolled: gradebook.students.len(),
            updated,
        })
    }
}

async fn read_gradebook<C: ConnectionTrait>(conn: &C, class_id: i64) -> Result<Gradebook> {
    let categories = AssignmentCategories::find()
        .filter(CategoryColumn::ClassId.eq(class_id))
        .order_by_asc(CategoryColumn::Id)
        .all(conn)
        .await
        .map_err(|e| LmsError::database_operation(format!("查询作业分类失败: {e}")))?;

    let category_ids: Vec<i64> = categories.iter().map(|c| c.id).collect();
    let assignments = if category_ids.is_empty() {
        Vec::new()
    } else {
        Assignments::find()
            .filter(AssignmentColumn::CategoryId.is_in(category_ids))
            .order_by_asc(AssignmentColumn::Id)
            .all(conn)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询作业失败: {e}")))?
    };

    let students: Vec<String> = Enrollments::find()
        .filter(EnrollmentColumn::ClassId.eq(class_id))
        .order_by_asc(EnrollmentColumn::StudentUid)
        .all(conn)
        .await
        .map_err(|e| LmsError::database_operation(format!("查询班级选课失败: {e}")))?
        .into_iter()
        .map(|e| e.student_uid)
        .collect();

    let assignment_ids: Vec<i64> = assignments.iter().map(|a| a.id).collect();
    let submissions = if assignment_ids.is_empty() {
        Vec::new()
    } else {
        Submissions::find()
            .filter(SubmissionColumn::AssignmentId.is_in(assignment_ids))
            .all(conn)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询提交失败: {e}")))?
    };

    let mut assignments_by_category: HashMap<i64, Vec<GradebookAssignment>> = HashMap::new();
    for assignment in assignments {
        assignments_by_category
            .entry(assignment.category_id)
            .or_default()
            .push(GradebookAssignment {
                assignment_id: assignment.id,
                max_points: assignment.max_points,
            });
    }

    let categories = categories
        .into_iter()
        .map(|c| GradebookCategory {
            category_id: c.id,
            weight: c.weight,
            assignments: assignments_by_category.remove(&c.id).unwrap_or_default(),
        })
        .collect();

    let mut scores: HashMap<String, HashMap<i64, f64>> = HashMap::new();
    for submission in submissions {
        scores
            .entry(submission.student_uid)
            .or_default()
            .insert(submission.assignment_id, submission.score);
    }

    Ok(Gradebook {
        categories,
        students,
        scores,
    })
}

async fn write_grades<C: ConnectionTrait>(
    conn: &C,
    class_id: i64,
    grades: &[(String, LetterGrade)],
) -> Result<u64> {
    let mut updated = 0;
    for (student_uid, grade) in grades {
        let result = Enrollments::update_many()
            .col_expr(EnrollmentColumn::Grade, Expr::value(grade.as_str()))
            .filter(EnrollmentColumn::ClassId.eq(class_id))
            .filter(EnrollmentColumn::StudentUid.eq(student_uid.as_str()))
            .exec(conn)
            .await
            .map_err(|e| LmsError::database_operation(format!("更新成绩失败: {e}")))?;
        updated += result.rows_affected;
    }

    debug!("Class {} grades written for {} enrollment(s)", class_id, updated);

    Ok(updated)
}
