use tracing::{info, warn};

use super::{CourseworkService, find_assignment};
use crate::errors::{LmsError, Result};
use crate::models::coursework::{entities::Submission, requests::SubmitAssignmentRequest};

pub async fn submit_assignment(
    service: &CourseworkService,
    req: SubmitAssignmentRequest,
) -> Result<Submission> {
    let storage = service.get_storage();

    // 只有选课学生可以提交
    if storage
        .get_enrollment(req.class_id, &req.student_uid)
        .await?
        .is_none()
    {
        warn!(
            "Submission rejected: {} is not enrolled in class {}",
            req.student_uid, req.class_id
        );
        return Err(LmsError::not_found("Student is not enrolled in this class."));
    }

    let assignment =
        find_assignment(storage.as_ref(), req.class_id, &req.category, &req.assignment).await?;

    let submission = storage
        .upsert_submission(assignment.id, &req.student_uid, &req.contents)
        .await?;
    info!(
        "{} submitted '{}' in class {}",
        req.student_uid, assignment.name, req.class_id
    );

    Ok(submission)
}

#[cfg(test)]
mod tests {
    use super::super::test_helpers::{Fixture, assignment, category, fixture};
    use crate::errors::LmsError;
    use crate::models::coursework::requests::SubmitAssignmentRequest;

    fn submit(f: &Fixture, student: &str, contents: &str) -> SubmitAssignmentRequest {
        SubmitAssignmentRequest {
            class_id: f.class_id,
            category: "Homework".to_string(),
            assignment: "HW1".to_string(),
            student_uid: student.to_string(),
            contents: contents.to_string(),
        }
    }

    async fn with_homework() -> Fixture {
        let f = fixture().await;
        f.service
            .create_category(category(f.class_id, "Homework", 30.0))
            .await
            .unwrap();
        f.service
            .create_assignment(assignment(f.class_id, "Homework", "HW1", 10.0))
            .await
            .unwrap();
        f
    }

    #[tokio::test]
    async fn test_first_submission_scores_zero() {
        let f = with_homework().await;

        let submission = f
            .service
            .submit_assignment(submit(&f, "u1", "draft"))
            .await
            .unwrap();

        assert_eq!(submission.score, 0.0);
        assert_eq!(submission.contents, "draft");
    }

    #[tokio::test]
    async fn test_resubmission_keeps_score() {
        let f = with_homework().await;
        let first = f
            .service
            .submit_assignment(submit(&f, "u1", "draft"))
            .await
            .unwrap();
        f.storage.update_submission_score(first.id, 7.5).await.unwrap();

        let second = f
            .service
            .submit_assignment(submit(&f, "u1", "final"))
            .await
            .unwrap();

        assert_eq!(second.id, first.id);
        assert_eq!(second.contents, "final");
        assert_eq!(second.score, 7.5);
    }

    #[tokio::test]
    async fn test_unenrolled_student_cannot_submit() {
        let f = with_homework().await;

        let err = f
            .service
            .submit_assignment(submit(&f, "u2", "hello"))
            .await
            .unwrap_err();
        assert!(matches!(err, LmsError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_unknown_assignment_not_found() {
        let f = with_homework().await;
        let mut req = submit(&f, "u1", "hello");
        req.assignment = "HW9".to_string();

        let err = f.service.submit_assignment(req).await.unwrap_err();
        assert!(matches!(err, LmsError::NotFound(_)));
    }
}
