use tracing::info;

use super::EnrollmentService;
use crate::errors::{LmsError, Result};
use crate::models::enrollments::entities::Enrollment;

pub async fn enroll(
    service: &EnrollmentService,
    class_id: i64,
    student_uid: &str,
) -> Result<Enrollment> {
    let storage = service.get_storage();

    if student_uid.trim().is_empty() {
        return Err(LmsError::validation("Student uid cannot be empty."));
    }

    if storage.get_offering_by_id(class_id).await?.is_none() {
        return Err(LmsError::not_found("Class does not exist."));
    }

    if storage.get_enrollment(class_id, student_uid).await?.is_some() {
        return Err(LmsError::already_exists(format!(
            "{student_uid} is already enrolled in class {class_id}."
        )));
    }

    let enrollment = storage.create_enrollment(class_id, student_uid).await?;
    info!("{} enrolled in class {}", student_uid, class_id);

    Ok(enrollment)
}
