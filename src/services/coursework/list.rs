use std::collections::HashMap;

use super::CourseworkService;
use crate::errors::Result;
use crate::models::coursework::responses::StudentAssignmentItem;

pub async fn list_student_assignments(
    service: &CourseworkService,
    class_id: i64,
    student_uid: &str,
) -> Result<Vec<StudentAssignmentItem>> {
    let storage = service.get_storage();

    // 未选课的学生看不到任何作业
    if storage.get_enrollment(class_id, student_uid).await?.is_none() {
        return Ok(Vec::new());
    }

    let categories = storage
        .list_class_categories_with_assignments(class_id)
        .await?;
    let assignment_ids: Vec<i64> = categories
        .iter()
        .flat_map(|(_, assignments)| assignments.iter().map(|a| a.id))
        .collect();

    let scores: HashMap<i64, f64> = storage
        .list_student_submissions(student_uid, &assignment_ids)
        .await?
        .into_iter()
        .map(|s| (s.assignment_id, s.score))
        .collect();

    let mut items: Vec<StudentAssignmentItem> = categories
        .into_iter()
        .flat_map(|(category, assignments)| {
            let scores = &scores;
            assignments.into_iter().map(move |a| StudentAssignmentItem {
                score: scores.get(&a.id).copied(),
                assignment: a.name,
                category: category.name.clone(),
                due: a.due,
            })
        })
        .collect();
    items.sort_by(|a, b| a.due.cmp(&b.due).then_with(|| a.assignment.cmp(&b.assignment)));

    Ok(items)
}
