pub mod classes;
pub mod enroll;
pub mod roster;

use std::sync::Arc;

use crate::errors::Result;
use crate::models::enrollments::{entities::Enrollment, responses::StudentClassItem};
use crate::storage::Storage;

pub struct EnrollmentService {
    storage: Arc<dyn Storage>,
}

impl EnrollmentService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub(crate) fn get_storage(&self) -> Arc<dyn Storage> {
        self.storage.clone()
    }

    // 学生选课，初始成绩为未评定
    pub async fn enroll(&self, class_id: i64, student_uid: &str) -> Result<Enrollment> {
        enroll::enroll(self, class_id, student_uid).await
    }

    // 班级花名册
    pub async fn list_class_roster(&self, class_id: i64) -> Result<Vec<Enrollment>> {
        roster::list_class_roster(self, class_id).await
    }

    // 学生的课程列表及成绩
    pub async fn list_student_classes(&self, student_uid: &str) -> Result<Vec<StudentClassItem>> {
        classes::list_student_classes(self, student_uid).await
    }
}
