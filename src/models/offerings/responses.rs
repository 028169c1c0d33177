use chrono::NaiveTime;
use serde::Serialize;

// 教师视角的授课列表项
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct InstructorClassItem {
    pub class_id: i64,
    pub subject: String,
    pub number: i32,
    pub name: String,
    pub season: String,
    pub year: i32,
    pub location: String,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}
