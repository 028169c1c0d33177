use serde::{Deserialize, Serialize};

/// 尚未给出成绩时的占位值
pub const UNGRADED: &str = "--";

// 选课记录
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Enrollment {
    pub id: i64,
    pub class_id: i64,
    pub student_uid: String,
    // 字母成绩，或 UNGRADED
    pub grade: String,
    pub enrolled_at: chrono::DateTime<chrono::Utc>,
}

impl Enrollment {
    pub fn is_graded(&self) -> bool {
        self.grade != UNGRADED
    }
}
