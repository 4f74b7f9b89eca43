//! 作业存储操作

use super::SeaOrmStorage;
use crate::entity::assignments::{ActiveModel, Column, Entity as Assignments};
use crate::errors::{GradebookError, Result};
use crate::models::{
    PaginationInfo, normalize_page_params,
    assignments::{
        entities::Assignment,
        requests::{AssignmentListQuery, CreateAssignmentRequest, UpdateAssignmentRequest},
        responses::AssignmentListResponse,
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建作业
    pub async fn create_assignment_impl(
        &self,
        req: CreateAssignmentRequest,
    ) -> Result<Assignment> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            subject_id: Set(req.subject_id),
            name: Set(req.name),
            kind: Set(req.kind.to_string()),
            description: Set(req.description),
            deadline: Set(req.deadline.map(|d| d.timestamp())),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| GradebookError::database_operation(format!("Failed to create assignment: {e}")))?;

        Ok(result.into_assignment())
    }

    /// 通过 ID 获取作业
    pub async fn get_assignment_by_id_impl(&self, id: i64) -> Result<Option<Assignment>> {
        let result = Assignments::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| GradebookError::database_operation(format!("Failed to query assignment: {e}")))?;

        Ok(result.map(|m| m.into_assignment()))
    }

    /// 分页列出作业
    pub async fn list_assignments_with_pagination_impl(
        &self,
        query: AssignmentListQuery,
    ) -> Result<AssignmentListResponse> {
        let (page, size) = normalize_page_params(query.page, query.size);

        let mut select = Assignments::find();

        // 科目筛选
        if let Some(subject_id) = query.subject_id {
            select = select.filter(Column::SubjectId.eq(subject_id));
        }

        // 类型筛选
        if let Some(kind) = query.kind {
            select = select.filter(Column::Kind.eq(kind.to_string()));
        }

        select = select.order_by_asc(Column::Id);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| GradebookError::database_operation(format!("Failed to count assignments: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| GradebookError::database_operation(format!("Failed to count assignment pages: {e}")))?;

        let assignments = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| GradebookError::database_operation(format!("Failed to query assignment list: {e}")))?;

        Ok(AssignmentListResponse {
            items: assignments
                .into_iter()
                .map(|m| m.into_assignment())
                .collect(),
            pagination: PaginationInfo::new(page, size, total, pages),
        })
    }

    /// 更新作业信息
    pub async fn update_assignment_impl(
        &self,
        id: i64,
        update: UpdateAssignmentRequest,
    ) -> Result<Option<Assignment>> {
        let existing = self.get_assignment_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Set(id),
            ..Default::default()
        };

        if let Some(name) = update.name {
            model.name = Set(name);
        }

        if let Some(kind) = update.kind {
            model.kind = Set(kind.to_string());
        }

        if let Some(description) = update.description {
            model.description = Set(Some(description));
        }

        if let Some(deadline) = update.deadline {
            model.deadline = Set(Some(deadline.timestamp()));
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| GradebookError::database_operation(format!("Failed to update assignment: {e}")))?;

        self.get_assignment_by_id_impl(id).await
    }

    /// 删除作业
    pub async fn delete_assignment_impl(&self, id: i64) -> Result<bool> {
        let result = Assignments::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| GradebookError::database_operation(format!("Failed to delete assignment: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
