use tracing::debug;

use super::GradeService;
use crate::errors::Result;
use crate::models::enrollments::entities::UNGRADED;
use crate::models::grades::entities::LetterGrade;

/// 字母成绩对应的绩点，无法识别的成绩按 0 计
pub fn grade_points(grade: &str) -> f64 {
    grade
        .parse::<LetterGrade>()
        .map(|letter| letter.points())
        .unwrap_or(0.0)
}

/// 未评定的课程不计入，所有课程等权平均；没有已评定课程时为 0.0
pub fn gpa_from_grades<'a, I>(grades: I) -> f64
where
    I: IntoIterator<Item = &'a str>,
{
    let points: Vec<f64> = grades
        .into_iter()
        .filter(|grade| *grade != UNGRADED)
        .map(grade_points)
        .collect();

    if points.is_empty() {
        return 0.0;
    }

    points.iter().sum::<f64>() / points.len() as f64
}

pub async fn compute_gpa(service: &GradeService, student_uid: &str) -> Result<f64> {
    let storage = service.get_storage();

    let enrollments = storage.list_student_enrollments(student_uid).await?;
    let gpa = gpa_from_grades(enrollments.iter().map(|e| e.grade.as_str()));

    debug!(
        "GPA for {} over {} enrollment(s): {:.2}",
        student_uid,
        enrollments.len(),
        gpa
    );

    Ok(gpa)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::Storage;
    use crate::storage::test_support::{seed_course, seed_offering, shared_memory_storage};

    #[test]
    fn test_ungraded_classes_are_excluded() {
        let gpa = gpa_from_grades(["A", "B-", "--"]);
        assert!((gpa - 3.35).abs() < 1e-9);
    }

    #[test]
    fn test_no_graded_classes_is_zero() {
        assert_eq!(gpa_from_grades(["--", "--"]), 0.0);
        assert_eq!(gpa_from_grades(std::iter::empty::<&str>()), 0.0);
    }

    #[test]
    fn test_unrecognized_grade_counts_as_zero() {
        let gpa = gpa_from_grades(["A", "E"]);
        assert!((gpa - 2.0).abs() < 1e-9);
        assert_eq!(grade_points("F"), 0.0);
        assert_eq!(grade_points("D-"), 0.7);
    }

    #[tokio::test]
    async fn test_compute_gpa_reads_all_enrollments() {
        let (raw, storage) = shared_memory_storage().await;
        let service = GradeService::new(storage);
        assert_eq!(service.compute_gpa("u1").await.unwrap(), 0.0);

        let course_id = seed_course(&raw, "MATH", 2210).await;
        let mut class_ids = Vec::new();
        for room in ["JWB 335", "LCB 219", "WEB 1230"] {
            let class_id = seed_offering(&raw, course_id, room).await;
            raw.create_enrollment(class_id, "u1").await.unwrap();
            class_ids.push(class_id);
        }

        raw.update_enrollment_grades(class_ids[0], &[("u1".to_string(), LetterGrade::A)])
            .await
            .unwrap();
        raw.update_enrollment_grades(class_ids[1], &[("u1".to_string(), LetterGrade::BMinus)])
            .await
            .unwrap();

        // 第三门仍为未评定
        let gpa = service.compute_gpa("u1").await.unwrap();
        assert!((gpa - 3.35).abs() < 1e-9);
    }
}
