//! 科目存储操作

use super::SeaOrmStorage;
use crate::entity::subjects::{ActiveModel, Column, Entity as Subjects};
use crate::errors::{GradebookError, Result};
use crate::models::{
    PaginationInfo, normalize_page_params,
    subjects::{
        entities::Subject,
        requests::{CreateSubjectRequest, SubjectListQuery, UpdateSubjectRequest},
        responses::SubjectListResponse,
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建科目
    pub async fn create_subject_impl(&self, req: CreateSubjectRequest) -> Result<Subject> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            name: Set(req.name),
            teacher_id: Set(req.teacher_id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| GradebookError::database_operation(format!("Failed to create subject: {e}")))?;

        Ok(result.into_subject())
    }

    /// 通过 ID 获取科目
    pub async fn get_subject_by_id_impl(&self, id: i64) -> Result<Option<Subject>> {
        let result = Subjects::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| GradebookError::database_operation(format!("Failed to query subject: {e}")))?;

        Ok(result.map(|m| m.into_subject()))
    }

    /// 分页列出科目
    pub async fn list_subjects_with_pagination_impl(
        &self,
        query: SubjectListQuery,
    ) -> Result<SubjectListResponse> {
        let (page, size) = normalize_page_params(query.page, query.size);

        let mut select = Subjects::find();

        // 教师筛选
        if let Some(teacher_id) = query.teacher_id {
            select = select.filter(Column::TeacherId.eq(teacher_id));
        }

        // 搜索条件
        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(Column::Name.contains(&escaped));
        }

        select = select.order_by_asc(Column::Id);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| GradebookError::database_operation(format!("Failed to count subjects: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| GradebookError::database_operation(format!("Failed to count subject pages: {e}")))?;

        let subjects = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| GradebookError::database_operation(format!("Failed to query subject list: {e}")))?;

        Ok(SubjectListResponse {
            items: subjects.into_iter().map(|m| m.into_subject()).collect(),
            pagination: PaginationInfo::new(page, size, total, pages),
        })
    }

    /// 更新科目信息
    pub async fn update_subject_impl(
        &self,
        id: i64,
        update: UpdateSubjectRequest,
    ) -> Result<Option<Subject>> {
        let existing = self.get_subject_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(name) = update.name {
            model.name = Set(name);
        }

        if let Some(teacher_id) = update.teacher_id {
            model.teacher_id = Set(Some(teacher_id));
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| GradebookError::database_operation(format!("Failed to update subject: {e}")))?;

        self.get_subject_by_id_impl(id).await
    }

    /// 删除科目
    pub async fn delete_subject_impl(&self, id: i64) -> Result<bool> {
        let result = Subjects::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| GradebookError::database_operation(format!("Failed to delete subject: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 列出教师名下的科目
    pub async fn list_subjects_by_teacher_impl(&self, teacher_id: i64) -> Result<Vec<Subject>> {
        let subjects = Subjects::find()
            .filter(Column::TeacherId.eq(teacher_id))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| GradebookError::database_operation(format!("Failed to query teacher subjects: {e}")))?;

        Ok(subjects.into_iter().map(|m| m.into_subject()).collect())
    }
}
