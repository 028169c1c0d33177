//! 测试用内存数据库

use std::sync::Arc;

use chrono::NaiveTime;
use sea_orm::{ActiveModelTrait, Set};

use super::Storage;
use super::sea_orm_storage::SeaOrmStorage;
use crate::config::{AppConfig, AppSettings, DatabaseConfig};
use crate::entity::prelude::CourseActiveModel;
use crate::models::offerings::entities::OfferingSlot;

pub(crate) fn memory_config() -> AppConfig {
    AppConfig {
        app: AppSettings {
            system_name: "LMS".to_string(),
            environment: "development".to_string(),
            log_level: "debug".to_string(),
        },
        database: DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            pool_size: 1,
            timeout: 5,
        },
    }
}

/// 已完成迁移的内存 SQLite 存储
pub(crate) async fn memory_storage() -> SeaOrmStorage {
    SeaOrmStorage::connect(&memory_config())
        .await
        .expect("in-memory storage should start")
}

pub(crate) async fn shared_memory_storage() -> (SeaOrmStorage, Arc<dyn Storage>) {
    let storage = memory_storage().await;
    let shared: Arc<dyn Storage> = Arc::new(storage.clone());
    (storage, shared)
}

/// 课程目录不属于本服务，测试中直接写入
pub(crate) async fn seed_course(storage: &SeaOrmStorage, subject: &str, number: i32) -> i64 {
    let model = CourseActiveModel {
        subject: Set(subject.to_string()),
        number: Set(number),
        name: Set(format!("{subject} {number}")),
        ..Default::default()
    };
    model
        .insert(&storage.db)
        .await
        .expect("course seed should insert")
        .id
}

/// 在 2024 年秋季指定地点开一个班，返回班级 ID
pub(crate) async fn seed_offering(storage: &SeaOrmStorage, course_id: i64, location: &str) -> i64 {
    let slot = OfferingSlot {
        season: "Fall".to_string(),
        year: 2024,
        location: location.to_string(),
        start_time: NaiveTime::from_hms_opt(9, 0, 0).expect("valid time"),
        end_time: NaiveTime::from_hms_opt(10, 20, 0).expect("valid time"),
        instructor_uid: "u0000009".to_string(),
    };
    storage
        .create_offering(course_id, slot)
        .await
        .expect("offering seed should insert")
        .id
}
