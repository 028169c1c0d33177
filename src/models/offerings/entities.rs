use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

// 课程（只读，由目录服务维护）
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Course {
    pub id: i64,
    // 学科代码，如 "CS"
    pub subject: String,
    // 课程编号，如 5530
    pub number: i32,
    pub name: String,
}

/// 开课的排课信息
///
/// 冲突检测只依赖这些字段，与持久化层解耦。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OfferingSlot {
    // 学期季节，如 "Spring"、"Fall"
    pub season: String,
    pub year: i32,
    pub location: String,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub instructor_uid: String,
}

// 开课（某课程在某学期的一个教学班）
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClassOffering {
    pub id: i64,
    pub course_id: i64,
    #[serde(flatten)]
    pub slot: OfferingSlot,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
