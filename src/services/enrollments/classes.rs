use super::EnrollmentService;
use crate::errors::Result;
use crate::models::enrollments::responses::StudentClassItem;

/// 学生选修的全部课程及当前字母成绩
pub async fn list_student_classes(
    service: &EnrollmentService,
    student_uid: &str,
) -> Result<Vec<StudentClassItem>> {
    let storage = service.get_storage();

    let classes = storage.list_student_classes(student_uid).await?;

    Ok(classes
        .into_iter()
        .map(|(enrollment, offering, course)| StudentClassItem {
            class_id: offering.id,
            subject: course.subject,
            number: course.number,
            name: course.name,
            season: offering.slot.season,
            year: offering.slot.year,
            grade: enrollment.grade,
        })
        .collect())
}
