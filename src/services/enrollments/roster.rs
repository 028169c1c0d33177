use super::EnrollmentService;
use crate::errors::{LmsError, Result};
use crate::models::enrollments::entities::Enrollment;

pub async fn list_class_roster(
    service: &EnrollmentService,
    class_id: i64,
) -> Result<Vec<Enrollment>> {
    let storage = service.get_storage();

    if storage.get_offering_by_id(class_id).await?.is_none() {
        return Err(LmsError::not_found("Class does not exist."));
    }

    storage.list_class_enrollments(class_id).await
}
