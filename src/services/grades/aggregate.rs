//! 加权成绩汇总
//!
//! 没有作业的分类不参与权重归一化，剩余分类的权重按比例放大到 100。

use crate::models::grades::entities::{Gradebook, GradebookCategory, LetterGrade};

/// 至少包含一个作业的分类
pub fn valid_categories(
    categories: &[GradebookCategory],
) -> impl Iterator<Item = &GradebookCategory> {
    categories.iter().filter(|c| !c.assignments.is_empty())
}

/// 计算百分制总评
///
/// `earned` 返回学生在某个作业上的得分（未提交为 0）。
/// 没有有效分类时返回 `None`。
pub fn weighted_percentage<F>(categories: &[GradebookCategory], earned: F) -> Option<f64>
where
    F: Fn(i64) -> f64,
{
    let valid: Vec<&GradebookCategory> = valid_categories(categories).collect();
    if valid.is_empty() {
        return None;
    }

    let total_valid_weight: f64 = valid.iter().map(|c| c.weight).sum();
    let scaling_factor = if total_valid_weight > 0.0 {
        100.0 / total_valid_weight
    } else {
        0.0
    };

    let earned_points = valid
        .iter()
        .map(|category| {
            let category_max: f64 = category.assignments.iter().map(|a| a.max_points).sum();
            let category_earned: f64 = category
                .assignments
                .iter()
                .map(|a| earned(a.assignment_id))
                .sum();
            let percentage = if category_max > 0.0 {
                category_earned / category_max
            } else {
                0.0
            };
            percentage * (category.weight * scaling_factor)
        })
        .sum();

    Some(earned_points)
}

/// 计算单个学生的字母成绩，没有有效分类时返回 `None`
pub fn student_letter_grade(gradebook: &Gradebook, student_uid: &str) -> Option<LetterGrade> {
    weighted_percentage(&gradebook.categories, |assignment_id| {
        gradebook.score_of(student_uid, assignment_id)
    })
    .map(LetterGrade::from_percentage)
}

/// 计算班级所有学生的字母成绩，跳过无法计算的学生
pub fn class_letter_grades(gradebook: &Gradebook) -> Vec<(String, LetterGrade)> {
    gradebook
        .students
        .iter()
        .filter_map(|uid| student_letter_grade(gradebook, uid).map(|grade| (uid.clone(), grade)))
        .collect()
}
