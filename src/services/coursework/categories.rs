use tracing::info;

use super::CourseworkService;
use crate::errors::{LmsError, Result};
use crate::models::coursework::{entities::AssignmentCategory, requests::CreateCategoryRequest};

pub async fn create_category(
    service: &CourseworkService,
    req: CreateCategoryRequest,
) -> Result<AssignmentCategory> {
    let storage = service.get_storage();

    if req.name.trim().is_empty() {
        return Err(LmsError::validation("Category name cannot be empty."));
    }
    if !req.weight.is_finite() || req.weight < 0.0 {
        return Err(LmsError::validation(format!(
            "Category weight must be non-negative, got {}.",
            req.weight
        )));
    }

    if storage.get_offering_by_id(req.class_id).await?.is_none() {
        return Err(LmsError::not_found("Class does not exist."));
    }

    // 同一班级内分类名唯一
    if storage
        .get_category_by_name(req.class_id, &req.name)
        .await?
        .is_some()
    {
        return Err(LmsError::already_exists(format!(
            "Category '{}' already exists.",
            req.name
        )));
    }

    let category = storage.create_category(req).await?;
    info!(
        "Category '{}' (weight {}) created in class {}",
        category.name, category.weight, category.class_id
    );

    Ok(category)
}
