use serde::Serialize;

// 学生视角的课程列表项
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StudentClassItem {
    pub class_id: i64,
    pub subject: String,
    pub number: i32,
    pub name: String,
    pub season: String,
    pub year: i32,
    // 字母成绩，或 UNGRADED
    pub grade: String,
}
