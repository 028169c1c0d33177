use tracing::{debug, info};

use super::aggregate::class_letter_grades;
use crate::errors::Result;
use crate::models::grades::entities::{RecomputeOutcome, Rescore};
use crate::storage::Storage;

/// 重新计算并写回班级内每个学生的字母成绩
///
/// 每次评分都会全班重算。没有有效分类的学生不写入，保留原成绩。
pub async fn recompute_grades(storage: &dyn Storage, class_id: i64) -> Result<()> {
    rescore_and_recompute(storage, class_id, None).await?;
    Ok(())
}

/// 写入分数并重算，读快照与写回处于同一事务
pub(crate) async fn rescore_and_recompute(
    storage: &dyn Storage,
    class_id: i64,
    rescore: Option<Rescore>,
) -> Result<RecomputeOutcome> {
    let outcome = storage
        .recompute_class_grades(class_id, rescore, &class_letter_grades)
        .await?;

    if outcome.updated == 0 {
        debug!(
            "Class {} has no gradable students ({} enrolled), grades left untouched",
            class_id, outcome.enrolled
        );
    } else {
        info!(
            "Recomputed grades for class {}: {} enrollment(s)",
            class_id, outcome.updated
        );
    }

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::Utc;

    use super::*;
    use crate::models::coursework::requests::{CreateAssignmentRequest, CreateCategoryRequest};
    use crate::models::enrollments::entities::UNGRADED;
    use crate::storage::test_support::{seed_course, seed_offering, shared_memory_storage};

    async fn setup_class() -> (Arc<dyn Storage>, i64) {
        let (raw, storage) = shared_memory_storage().await;
        let course_id = seed_course(&raw, "CS", 5530).await;
        let class_id = seed_offering(&raw, course_id, "WEB L104").await;
        (storage, class_id)
    }

    async fn add_assignment(
        storage: &Arc<dyn Storage>,
        class_id: i64,
        category: &str,
        weight: f64,
        name: &str,
    ) -> i64 {
        let category = match storage.get_category_by_name(class_id, category).await.unwrap() {
            Some(existing) => existing,
            None => storage
                .create_category(CreateCategoryRequest {
                    class_id,
                    name: category.to_string(),
                    weight,
                })
                .await
                .unwrap(),
        };
        storage
            .create_assignment(
                category.id,
                CreateAssignmentRequest {
                    class_id,
                    category: category.name.clone(),
                    name: name.to_string(),
                    max_points: 100.0,
                    due: Utc::now(),
                    contents: String::new(),
                },
            )
            .await
            .unwrap()
            .id
    }

    async fn score(storage: &Arc<dyn Storage>, assignment_id: i64, student: &str, points: f64) {
        let submission = storage
            .upsert_submission(assignment_id, student, "answer")
            .await
            .unwrap();
        storage
            .update_submission_score(submission.id, points)
            .await
            .unwrap();
    }

    async fn grade_of(storage: &Arc<dyn Storage>, class_id: i64, student: &str) -> String {
        storage
            .get_enrollment(class_id, student)
            .await
            .unwrap()
            .unwrap()
            .grade
    }

    #[tokio::test]
    async fn test_recompute_writes_every_enrolled_student() {
        let (storage, class_id) = setup_class().await;
        let exam = add_assignment(&storage, class_id, "Exams", 50.0, "Midterm").await;
        add_assignment(&storage, class_id, "Homework", 50.0, "HW1").await;
        storage.create_enrollment(class_id, "u1").await.unwrap();
        storage.create_enrollment(class_id, "u2").await.unwrap();

        score(&storage, exam, "u1", 80.0).await;

        recompute_grades(storage.as_ref(), class_id).await.unwrap();

        // 80 * 0.5 + 0 * 0.5 = 40
        assert_eq!(grade_of(&storage, class_id, "u1").await, "F");
        // 未提交的学生同样被重算
        assert_eq!(grade_of(&storage, class_id, "u2").await, "F");
    }

    #[tokio::test]
    async fn test_recompute_is_idempotent() {
        let (storage, class_id) = setup_class().await;
        let exam = add_assignment(&storage, class_id, "Exams", 100.0, "Final").await;
        storage.create_enrollment(class_id, "u1").await.unwrap();
        score(&storage, exam, "u1", 88.0).await;

        recompute_grades(storage.as_ref(), class_id).await.unwrap();
        let first = grade_of(&storage, class_id, "u1").await;
        recompute_grades(storage.as_ref(), class_id).await.unwrap();
        let second = grade_of(&storage, class_id, "u1").await;

        assert_eq!(first, "B+");
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_class_without_assignments_keeps_existing_grade() {
        let (storage, class_id) = setup_class().await;
        storage
            .create_category(CreateCategoryRequest {
                class_id,
                name: "Quizzes".to_string(),
                weight: 100.0,
            })
            .await
            .unwrap();
        storage.create_enrollment(class_id, "u1").await.unwrap();

        recompute_grades(storage.as_ref(), class_id).await.unwrap();

        assert_eq!(grade_of(&storage, class_id, "u1").await, UNGRADED);
    }

    #[tokio::test]
    async fn test_empty_category_is_ignored_end_to_end() {
        let (storage, class_id) = setup_class().await;
        let exam = add_assignment(&storage, class_id, "Exams", 40.0, "Midterm").await;
        storage.create_enrollment(class_id, "u1").await.unwrap();
        score(&storage, exam, "u1", 91.0).await;

        recompute_grades(storage.as_ref(), class_id).await.unwrap();
        let before = grade_of(&storage, class_id, "u1").await;

        storage
            .create_category(CreateCategoryRequest {
                class_id,
                name: "Labs".to_string(),
                weight: 60.0,
            })
            .await
            .unwrap();
        recompute_grades(storage.as_ref(), class_id).await.unwrap();

        assert_eq!(before, "A-");
        assert_eq!(grade_of(&storage, class_id, "u1").await, before);
    }

    #[tokio::test]
    async fn test_missing_submission_rolls_back_recompute() {
        let (storage, class_id) = setup_class().await;
        add_assignment(&storage, class_id, "Exams", 100.0, "Final").await;
        storage.create_enrollment(class_id, "u1").await.unwrap();

        let rescore = Rescore {
            submission_id: 404,
            score: 90.0,
        };
        let err = rescore_and_recompute(storage.as_ref(), class_id, Some(rescore))
            .await
            .unwrap_err();

        assert!(matches!(err, crate::errors::LmsError::NotFound(_)));
        assert_eq!(grade_of(&storage, class_id, "u1").await, UNGRADED);
    }

    #[tokio::test]
    async fn test_rescore_is_visible_to_same_recompute() {
        let (storage, class_id) = setup_class().await;
        let exam = add_assignment(&storage, class_id, "Exams", 100.0, "Final").await;
        storage.create_enrollment(class_id, "u1").await.unwrap();
        let submission = storage
            .upsert_submission(exam, "u1", "answers")
            .await
            .unwrap();

        let outcome = rescore_and_recompute(
            storage.as_ref(),
            class_id,
            Some(Rescore {
                submission_id: submission.id,
                score: 95.0,
            }),
        )
        .await
        .unwrap();

        assert_eq!(outcome.rescored.map(|s| s.score), Some(95.0));
        assert_eq!(outcome.enrolled, 1);
        assert_eq!(grade_of(&storage, class_id, "u1").await, "A");
    }
}
