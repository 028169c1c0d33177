use tracing::info;

use super::CourseworkService;
use crate::errors::{LmsError, Result};
use crate::models::coursework::{entities::Assignment, requests::CreateAssignmentRequest};

pub async fn create_assignment(
    service: &CourseworkService,
    req: CreateAssignmentRequest,
) -> Result<Assignment> {
    let storage = service.get_storage();

    if req.name.trim().is_empty() {
        return Err(LmsError::validation("Assignment name cannot be empty."));
    }
    // 满分为 0 会使分类得分无法计算
    if !req.max_points.is_finite() || req.max_points <= 0.0 {
        return Err(LmsError::validation(format!(
            "Assignment max points must be positive, got {}.",
            req.max_points
        )));
    }

    let category = storage
        .get_category_by_name(req.class_id, &req.category)
        .await?
        .ok_or_else(|| {
            LmsError::not_found(format!("Category '{}' does not exist.", req.category))
        })?;

    if storage
        .get_assignment_by_name(category.id, &req.name)
        .await?
        .is_some()
    {
        return Err(LmsError::already_exists(format!(
            "Assignment '{}' already exists in category '{}'.",
            req.name, category.name
        )));
    }

    let class_id = req.class_id;
    let assignment = storage.create_assignment(category.id, req).await?;
    info!(
        "Assignment '{}' ({} pts) created in class {} category '{}'",
        assignment.name, assignment.max_points, class_id, category.name
    );

    Ok(assignment)
}
