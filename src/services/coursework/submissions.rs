use super::CourseworkService;
use crate::errors::Result;
use crate::models::coursework::entities::Submission;

/// 某作业的全部提交，供教师评分查看
///
/// 分类或作业不存在时返回空列表。
pub async fn list_assignment_submissions(
    service: &CourseworkService,
    class_id: i64,
    category: &str,
    assignment: &str,
) -> Result<Vec<Submission>> {
    let storage = service.get_storage();

    let Some(category) = storage.get_category_by_name(class_id, category).await? else {
        return Ok(Vec::new());
    };
    let Some(assignment) = storage
        .get_assignment_by_name(category.id, assignment)
        .await?
    else {
        return Ok(Vec::new());
    };

    storage.list_assignment_submissions(assignment.id).await
}

#[cfg(test)]
mod tests {
    use super::super::test_helpers::{assignment, category, fixture};
    use crate::models::coursework::requests::SubmitAssignmentRequest;

    fn submit(class_id: i64, name: &str, student: &str) -> SubmitAssignmentRequest {
        SubmitAssignmentRequest {
            class_id,
            category: "Homework".to_string(),
            assignment: name.to_string(),
            student_uid: student.to_string(),
            contents: format!("{student} answers"),
        }
    }

    #[tokio::test]
    async fn test_lists_submissions_of_one_assignment() {
        let f = fixture().await;
        f.storage.create_enrollment(f.class_id, "u2").await.unwrap();
        f.service
            .create_category(category(f.class_id, "Homework", 30.0))
            .await
            .unwrap();
        for name in ["HW1", "HW2"] {
            f.service
                .create_assignment(assignment(f.class_id, "Homework", name, 10.0))
                .await
                .unwrap();
        }
        f.service
            .submit_assignment(submit(f.class_id, "HW1", "u2"))
            .await
            .unwrap();
        f.service
            .submit_assignment(submit(f.class_id, "HW1", "u1"))
            .await
            .unwrap();
        f.service
            .submit_assignment(submit(f.class_id, "HW2", "u1"))
            .await
            .unwrap();

        let submissions = f
            .service
            .list_assignment_submissions(f.class_id, "Homework", "HW1")
            .await
            .unwrap();

        let uids: Vec<_> = submissions.iter().map(|s| s.student_uid.as_str()).collect();
        assert_eq!(uids, vec!["u1", "u2"]);
        assert!(submissions.iter().all(|s| s.score == 0.0));
    }

    #[tokio::test]
    async fn test_unknown_assignment_lists_nothing() {
        let f = fixture().await;
        f.service
            .create_category(category(f.class_id, "Homework", 30.0))
            .await
            .unwrap();

        let missing_category = f
            .service
            .list_assignment_submissions(f.class_id, "Quizzes", "Q1")
            .await
            .unwrap();
        let missing_assignment = f
            .service
            .list_assignment_submissions(f.class_id, "Homework", "HW9")
            .await
            .unwrap();

        assert!(missing_category.is_empty());
        assert!(missing_assignment.is_empty());
    }
}
