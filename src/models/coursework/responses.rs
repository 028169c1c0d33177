use serde::Serialize;

// 学生视角的作业列表项
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StudentAssignmentItem {
    pub assignment: String,
    pub category: String,
    pub due: chrono::DateTime<chrono::Utc>,
    // 未提交时为 None
    pub score: Option<f64>,
}
