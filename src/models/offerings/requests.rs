use chrono::{NaiveTime, Timelike};
use serde::Deserialize;

use super::entities::OfferingSlot;

// 创建开课请求
#[derive(Debug, Clone, Deserialize)]
pub struct CreateOfferingRequest {
    pub subject: String,
    pub number: i32,
    pub season: String,
    pub year: i32,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub location: String,
    pub instructor_uid: String,
}

impl CreateOfferingRequest {
    /// 排课信息，时间截断到秒，与存储精度一致
    pub fn slot(&self) -> OfferingSlot {
        OfferingSlot {
            season: self.season.clone(),
            year: self.year,
            location: self.location.clone(),
            start_time: whole_seconds(self.start_time),
            end_time: whole_seconds(self.end_time),
            instructor_uid: self.instructor_uid.clone(),
        }
    }
}

fn whole_seconds(time: NaiveTime) -> NaiveTime {
    time.with_nanosecond(0).unwrap_or(time)
}
