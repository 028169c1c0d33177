use tracing::info;

use super::{CourseworkService, find_assignment};
use crate::errors::{LmsError, Result};
use crate::models::coursework::{entities::Submission, requests::GradeSubmissionRequest};

/// 为提交打分，随后重算整个班级的字母成绩
pub async fn grade_submission(
    service: &CourseworkService,
    req: GradeSubmissionRequest,
) -> Result<Submission> {
    let storage = service.get_storage();

    if !req.score.is_finite() || req.score < 0.0 {
        return Err(LmsError::validation(format!(
            "Score must be non-negative, got {}.",
            req.score
        )));
    }

    let assignment =
        find_assignment(storage.as_ref(), req.class_id, &req.category, &req.assignment).await?;

    let submission = storage
        .get_submission(assignment.id, &req.student_uid)
        .await?
        .ok_or_else(|| {
            LmsError::not_found(format!(
                "No submission from {} for '{}'.",
                req.student_uid, assignment.name
            ))
        })?;

    // 分数写入与全班重算在同一班级锁和同一事务内完成
    let graded = service
        .grades
        .apply_score(req.class_id, submission.id, req.score)
        .await?;
    info!(
        "Graded '{}' for {}: {}/{}",
        assignment.name, req.student_uid, graded.score, assignment.max_points
    );

    Ok(graded)
}

#[cfg(test)]
mod tests {
    use super::super::test_helpers::{Fixture, assignment, category, fixture};
    use crate::errors::LmsError;
    use crate::models::coursework::requests::{GradeSubmissionRequest, SubmitAssignmentRequest};
    use crate::models::enrollments::entities::UNGRADED;

    fn grade(f: &Fixture, assignment: &str, student: &str, score: f64) -> GradeSubmissionRequest {
        GradeSubmissionRequest {
            class_id: f.class_id,
            category: "Exams".to_string(),
            assignment: assignment.to_string(),
            student_uid: student.to_string(),
            score,
        }
    }

    async fn submitted(f: &Fixture, assignment: &str, student: &str) {
        f.service
            .submit_assignment(SubmitAssignmentRequest {
                class_id: f.class_id,
                category: "Exams".to_string(),
                assignment: assignment.to_string(),
                student_uid: student.to_string(),
                contents: "answers".to_string(),
            })
            .await
            .unwrap();
    }

    async fn with_exams() -> Fixture {
        let f = fixture().await;
        f.storage.create_enrollment(f.class_id, "u2").await.unwrap();
        f.service
            .create_category(category(f.class_id, "Exams", 100.0))
            .await
            .unwrap();
        for name in ["Midterm", "Final"] {
            f.service
                .create_assignment(assignment(f.class_id, "Exams", name, 50.0))
                .await
                .unwrap();
        }
        f
    }

    async fn grade_of(f: &Fixture, student: &str) -> String {
        f.storage
            .get_enrollment(f.class_id, student)
            .await
            .unwrap()
            .unwrap()
            .grade
    }

    #[tokio::test]
    async fn test_grading_recomputes_whole_class() {
        let f = with_exams().await;
        submitted(&f, "Midterm", "u1").await;
        assert_eq!(grade_of(&f, "u1").await, UNGRADED);

        let graded = f
            .service
            .grade_submission(grade(&f, "Midterm", "u1", 47.0))
            .await
            .unwrap();
        assert_eq!(graded.score, 47.0);

        // 47 / 100 = 47%
        assert_eq!(grade_of(&f, "u1").await, "F");
        // 没有任何提交的学生也被写入成绩
        assert_eq!(grade_of(&f, "u2").await, "F");

        submitted(&f, "Final", "u1").await;
        f.service
            .grade_submission(grade(&f, "Final", "u1", 48.0))
            .await
            .unwrap();
        assert_eq!(grade_of(&f, "u1").await, "A");
    }

    #[tokio::test]
    async fn test_grading_without_submission_not_found() {
        let f = with_exams().await;

        let err = f
            .service
            .grade_submission(grade(&f, "Midterm", "u2", 40.0))
            .await
            .unwrap_err();
        assert!(matches!(err, LmsError::NotFound(_)));
        assert_eq!(grade_of(&f, "u2").await, UNGRADED);
    }

    #[tokio::test]
    async fn test_negative_score_rejected() {
        let f = with_exams().await;
        submitted(&f, "Midterm", "u1").await;

        let err = f
            .service
            .grade_submission(grade(&f, "Midterm", "u1", -3.0))
            .await
            .unwrap_err();
        assert!(matches!(err, LmsError::Validation(_)));
    }

    #[tokio::test]
    async fn test_concurrent_grading_matches_fresh_recompute() {
        let f = with_exams().await;
        for student in ["u1", "u2"] {
            submitted(&f, "Midterm", student).await;
            submitted(&f, "Final", student).await;
        }
        f.service
            .grade_submission(grade(&f, "Final", "u1", 45.0))
            .await
            .unwrap();
        f.service
            .grade_submission(grade(&f, "Final", "u2", 40.0))
            .await
            .unwrap();

        let (first, second) = tokio::join!(
            f.service.grade_submission(grade(&f, "Midterm", "u1", 48.0)),
            f.service.grade_submission(grade(&f, "Midterm", "u2", 44.0)),
        );
        first.unwrap();
        second.unwrap();

        // 93% 与 84%
        assert_eq!(grade_of(&f, "u1").await, "A");
        assert_eq!(grade_of(&f, "u2").await, "B");

        let before = (grade_of(&f, "u1").await, grade_of(&f, "u2").await);
        f.grades.recompute_grades(f.class_id).await.unwrap();
        let after = (grade_of(&f, "u1").await, grade_of(&f, "u2").await);
        assert_eq!(before, after);
    }
}
