pub mod aggregate;
pub mod gpa;
pub mod recompute;

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::Mutex;

use crate::errors::{LmsError, Result};
use crate::models::coursework::entities::Submission;
use crate::models::grades::entities::Rescore;
use crate::storage::Storage;

pub struct GradeService {
    storage: Arc<dyn Storage>,
    // 同一班级的评分与重算串行执行
    class_locks: DashMap<i64, Arc<Mutex<()>>>,
}

impl GradeService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self {
            storage,
            class_locks: DashMap::new(),
        }
    }

    pub(crate) fn get_storage(&self) -> Arc<dyn Storage> {
        self.storage.clone()
    }

    pub(crate) fn class_lock(&self, class_id: i64) -> Arc<Mutex<()>> {
        self.class_locks
            .entry(class_id)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    // 重新计算班级内所有学生的字母成绩
    pub async fn recompute_grades(&self, class_id: i64) -> Result<()> {
        let lock = self.class_lock(class_id);
        let _guard = lock.lock().await;

        recompute::recompute_grades(self.storage.as_ref(), class_id).await
    }

    // 写入提交分数并重算全班成绩
    pub(crate) async fn apply_score(
        &self,
        class_id: i64,
        submission_id: i64,
        score: f64,
    ) -> Result<Submission> {
        let lock = self.class_lock(class_id);
        let _guard = lock.lock().await;

        let rescore = Rescore {
            submission_id,
            score,
        };
        recompute::rescore_and_recompute(self.storage.as_ref(), class_id, Some(rescore))
            .await?
            .rescored
            .ok_or_else(|| LmsError::not_found("Submission does not exist."))
    }

    // 计算学生的平均绩点
    pub async fn compute_gpa(&self, student_uid: &str) -> Result<f64> {
        gpa::compute_gpa(self, student_uid).await
    }
}
