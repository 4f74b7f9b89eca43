//! 教师存储操作

use super::SeaOrmStorage;
use crate::entity::teachers::{ActiveModel, Column, Entity as Teachers};
use crate::errors::{GradebookError, Result};
use crate::models::{
    PaginationInfo, normalize_page_params,
    teachers::{
        entities::Teacher,
        requests::{CreateTeacherRequest, TeacherListQuery, UpdateTeacherRequest},
        responses::TeacherListResponse,
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建教师
    pub async fn create_teacher_impl(&self, req: CreateTeacherRequest) -> Result<Teacher> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            first_name: Set(req.first_name),
            last_name: Set(req.last_name),
            email: Set(req.email),
            address: Set(req.address),
            phone: Set(req.phone),
            birth_date: Set(req.birth_date.timestamp()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| GradebookError::database_operation(format!("Failed to create teacher: {e}")))?;

        Ok(result.into_teacher())
    }

    /// 通过 ID 获取教师
    pub async fn get_teacher_by_id_impl(&self, id: i64) -> Result<Option<Teacher>> {
        let result = Teachers::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| GradebookError::database_operation(format!("Failed to query teacher: {e}")))?;

        Ok(result.map(|m| m.into_teacher()))
    }

    /// 分页列出教师
    pub async fn list_teachers_with_pagination_impl(
        &self,
        query: TeacherListQuery,
    ) -> Result<TeacherListResponse> {
        let (page, size) = normalize_page_params(query.page, query.size);

        let mut select = Teachers::find();

        // 搜索条件（姓名或邮箱）
        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(
                Condition::any()
                    .add(Column::FirstName.contains(&escaped))
                    .add(Column::LastName.contains(&escaped))
                    .add(Column::Email.contains(&escaped)),
            );
        }

        select = select.order_by_asc(Column::Id);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| GradebookError::database_operation(format!("Failed to count teachers: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| GradebookError::database_operation(format!("Failed to count teacher pages: {e}")))?;

        let teachers = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| GradebookError::database_operation(format!("Failed to query teacher list: {e}")))?;

        Ok(TeacherListResponse {
            items: teachers.into_iter().map(|m| m.into_teacher()).collect(),
            pagination: PaginationInfo::new(page, size, total, pages),
        })
    }

    /// 更新教师信息
    pub async fn update_teacher_impl(
        &self,
        id: i64,
        update: UpdateTeacherRequest,
    ) -> Result<Option<Teacher>> {
        let existing = self.get_teacher_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(first_name) = update.first_name {
            model.first_name = Set(first_name);
        }

        if let Some(last_name) = update.last_name {
            model.last_name = Set(last_name);
        }

        if let Some(email) = update.email {
            model.email = Set(email);
        }

        if let Some(address) = update.address {
            model.address = Set(Some(address));
        }

        if let Some(phone) = update.phone {
            model.phone = Set(Some(phone));
        }

        if let Some(birth_date) = update.birth_date {
            model.birth_date = Set(birth_date.timestamp());
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| GradebookError::database_operation(format!("Failed to update teacher: {e}")))?;

        self.get_teacher_by_id_impl(id).await
    }

    /// 删除教师
    pub async fn delete_teacher_impl(&self, id: i64) -> Result<bool> {
        let result = Teachers::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| GradebookError::database_operation(format!("Failed to delete teacher: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
