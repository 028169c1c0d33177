pub mod conflict;
pub mod create;
pub mod list;

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::Mutex;

use crate::errors::Result;
use crate::models::offerings::{
    entities::ClassOffering, requests::CreateOfferingRequest, responses::InstructorClassItem,
};
use crate::storage::Storage;

/// 排课锁的键：(学期季节, 年份, 地点)
type SlotKey = (String, i32, String);

pub struct OfferingService {
    storage: Arc<dyn Storage>,
    // 同一学期同一地点的检查与插入需要串行执行
    slot_locks: DashMap<SlotKey, Arc<Mutex<()>>>,
}

impl OfferingService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self {
            storage,
            slot_locks: DashMap::new(),
        }
    }

    pub(crate) fn get_storage(&self) -> Arc<dyn Storage> {
        self.storage.clone()
    }

    pub(crate) fn slot_lock(&self, season: &str, year: i32, location: &str) -> Arc<Mutex<()>> {
        self.slot_locks
            .entry((season.to_string(), year, location.to_string()))
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    // 创建开课（通过冲突检测后才写入）
    pub async fn try_create_offering(&self, req: CreateOfferingRequest) -> Result<ClassOffering> {
        create::try_create_offering(self, req).await
    }

    // 教师讲授的全部开课
    pub async fn list_instructor_classes(
        &self,
        instructor_uid: &str,
    ) -> Result<Vec<InstructorClassItem>> {
        list::list_instructor_classes(self, instructor_uid).await
    }
}
