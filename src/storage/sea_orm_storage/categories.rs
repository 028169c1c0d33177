//! 作业分类存储操作

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::assignment_categories::{ActiveModel, Column, Entity as AssignmentCategories};
use crate::entity::assignments::{Column as AssignmentColumn, Entity as Assignments};
use crate::errors::{LmsError, Result};
use crate::models::coursework::{
    entities::{Assignment, AssignmentCategory},
    requests::CreateCategoryRequest,
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 通过班级和名称获取分类
    pub async fn get_category_by_name_impl(
        &self,
        class_id: i64,
        name: &str,
    ) -> Result<Option<AssignmentCategory>> {
        let result = AssignmentCategories::find()
            .filter(Column::ClassId.eq(class_id))
            .filter(Column::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询作业分类失败: {e}")))?;

        Ok(result.map(|m| m.into_category()))
    }

    /// 创建分类
    pub async fn create_category_impl(
        &self,
        req: CreateCategoryRequest,
    ) -> Result<AssignmentCategory> {
        let model = ActiveModel {
            class_id: Set(req.class_id),
            name: Set(req.name),
            weight: Set(req.weight),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("创建作业分类失败: {e}")))?;

        Ok(result.into_category())
    }

    /// 列出班级的分类及其作业
    pub async fn list_class_categories_with_assignments_impl(
        &self,
        class_id: i64,
    ) -> Result<Vec<(AssignmentCategory, Vec<Assignment>)>> {
        let categories = AssignmentCategories::find()
            .filter(Column::ClassId.eq(class_id))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询作业分类失败: {e}")))?;

        if categories.is_empty() {
            return Ok(Vec::new());
        }

        let category_ids: Vec<i64> = categories.iter().map(|c| c.id).collect();
        let assignments = Assignments::find()
            .filter(AssignmentColumn::CategoryId.is_in(category_ids))
            .order_by_asc(AssignmentColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询作业失败: {e}")))?;

        let mut by_category: HashMap<i64, Vec<Assignment>> = HashMap::new();
        for assignment in assignments {
            by_category
                .entry(assignment.category_id)
                .or_default()
                .push(assignment.into_assignment());
        }

        Ok(categories
            .into_iter()
            .map(|c| {
                let assignments = by_category.remove(&c.id).unwrap_or_default();
                (c.into_category(), assignments)
            })
            .collect())
    }
}
