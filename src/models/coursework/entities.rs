use serde::{Deserialize, Serialize};

// 作业分类
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssignmentCategory {
    pub id: i64,
    pub class_id: i64,
    pub name: String,
    // 权重，约定各分类之和为 100，但不强制
    pub weight: f64,
}

// 作业
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Assignment {
    pub id: i64,
    pub category_id: i64,
    pub name: String,
    pub max_points: f64,
    pub due: chrono::DateTime<chrono::Utc>,
    pub contents: String,
}

// 学生提交
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Submission {
    pub id: i64,
    pub assignment_id: i64,
    pub student_uid: String,
    // 未评分前为 0
    pub score: f64,
    pub contents: String,
    pub submitted_at: chrono::DateTime<chrono::Utc>,
}
