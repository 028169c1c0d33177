use serde::Deserialize;

// 创建作业分类请求
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCategoryRequest {
    pub class_id: i64,
    pub name: String,
    pub weight: f64,
}

// 创建作业请求，分类按名称在班级内定位
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAssignmentRequest {
    pub class_id: i64,
    pub category: String,
    pub name: String,
    pub max_points: f64,
    pub due: chrono::DateTime<chrono::Utc>,
    pub contents: String,
}

// 学生提交作业请求
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitAssignmentRequest {
    pub class_id: i64,
    pub category: String,
    pub assignment: String,
    pub student_uid: String,
    pub contents: String,
}

// 教师评分请求
#[derive(Debug, Clone, Deserialize)]
pub struct GradeSubmissionRequest {
    pub class_id: i64,
    pub category: String,
    pub assignment: String,
    pub student_uid: String,
    pub score: f64,
}
