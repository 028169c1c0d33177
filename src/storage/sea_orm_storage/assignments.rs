//! 作业存储操作

use super::SeaOrmStorage;
use crate::entity::assignments::{ActiveModel, Column, Entity as Assignments};
use crate::errors::{LmsError, Result};
use crate::models::coursework::{entities::Assignment, requests::CreateAssignmentRequest};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};

impl SeaOrmStorage {
    /// 通过分类和名称获取作业
    pub async fn get_assignment_by_name_impl(
        &self,
        category_id: i64,
        name: &str,
    ) -> Result<Option<Assignment>> {
        let result = Assignments::find()
            .filter(Column::CategoryId.eq(category_id))
            .filter(Column::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询作业失败: {e}")))?;

        Ok(result.map(|m| m.into_assignment()))
    }

    /// 创建作业
    pub async fn create_assignment_impl(
        &self,
        category_id: i64,
        req: CreateAssignmentRequest,
    ) -> Result<Assignment> {
        let model = ActiveModel {
            category_id: Set(category_id),
            name: Set(req.name),
            max_points: Set(req.max_points),
            due: Set(req.due.timestamp()),
            contents: Set(req.contents),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("创建作业失败: {e}")))?;

        Ok(result.into_assignment())
    }
}
