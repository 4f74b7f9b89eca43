//! 成绩记录存储操作

use super::SeaOrmStorage;
use crate::entity::gradebook_entries::{ActiveModel, Column, Entity as GradebookEntries};
use crate::errors::{GradebookError, Result};
use crate::models::{
    PaginationInfo, normalize_page_params,
    gradebook::{
        entities::GradebookEntry,
        requests::{EntryListQuery, GradeAssignmentRequest},
        responses::EntryListResponse,
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 写入成绩记录
    ///
    /// (student_id, subject_id, assignment_id) 上有唯一索引，
    /// 并发下重复写入由数据库拒绝。
    pub async fn create_entry_impl(&self, req: GradeAssignmentRequest) -> Result<GradebookEntry> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            student_id: Set(req.student_id),
            subject_id: Set(req.subject_id),
            assignment_id: Set(req.assignment_id),
            grade: Set(req.grade),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| GradebookError::database_operation(format!("Failed to create gradebook entry: {e}")))?;

        Ok(result.into_entry())
    }

    /// 通过 ID 获取成绩记录
    pub async fn get_entry_by_id_impl(&self, id: i64) -> Result<Option<GradebookEntry>> {
        let result = GradebookEntries::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| GradebookError::database_operation(format!("Failed to query gradebook entry: {e}")))?;

        Ok(result.map(|m| m.into_entry()))
    }

    /// 查询三元组对应的成绩记录
    pub async fn get_entry_by_triple_impl(
        &self,
        student_id: i64,
        subject_id: i64,
        assignment_id: i64,
    ) -> Result<Option<GradebookEntry>> {
        let result = GradebookEntries::find()
            .filter(
                Condition::all()
                    .add(Column::StudentId.eq(student_id))
                    .add(Column::SubjectId.eq(subject_id))
                    .add(Column::AssignmentId.eq(assignment_id)),
            )
            .one(&self.db)
            .await
            .map_err(|e| GradebookError::database_operation(format!("Failed to query gradebook entry: {e}")))?;

        Ok(result.map(|m| m.into_entry()))
    }

    /// 分页列出成绩记录，按写入顺序
    pub async fn list_entries_with_pagination_impl(
        &self,
        query: EntryListQuery,
    ) -> Result<EntryListResponse> {
        let (page, size) = normalize_page_params(query.page, query.size);

        let mut select = GradebookEntries::find();

        if let Some(student_id) = query.student_id {
            select = select.filter(Column::StudentId.eq(student_id));
        }

        if let Some(subject_id) = query.subject_id {
            select = select.filter(Column::SubjectId.eq(subject_id));
        }

        if let Some(assignment_id) = query.assignment_id {
            select = select.filter(Column::AssignmentId.eq(assignment_id));
        }

        // 按写入顺序返回
        select = select.order_by_asc(Column::Id);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| GradebookError::database_operation(format!("Failed to count gradebook entries: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| GradebookError::database_operation(format!("Failed to count gradebook entry pages: {e}")))?;

        let entries = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| GradebookError::database_operation(format!("Failed to query gradebook entry list: {e}")))?;

        Ok(EntryListResponse {
            items: entries.into_iter().map(|m| m.into_entry()).collect(),
            pagination: PaginationInfo::new(page, size, total, pages),
        })
    }

    /// 删除成绩记录
    pub async fn delete_entry_impl(&self, id: i64) -> Result<bool> {
        let result = GradebookEntries::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| GradebookError::database_operation(format!("Failed to delete gradebook entry: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 统计引用某学生的成绩记录数
    pub async fn count_entries_by_student_impl(&self, student_id: i64) -> Result<u64> {
        GradebookEntries::find()
            .filter(Column::StudentId.eq(student_id))
            .count(&self.db)
            .await
            .map_err(|e| GradebookError::database_operation(format!("Failed to count gradebook entries: {e}")))
    }

    /// 统计引用某科目的成绩记录数
    pub async fn count_entries_by_subject_impl(&self, subject_id: i64) -> Result<u64> {
        GradebookEntries::find()
            .filter(Column::SubjectId.eq(subject_id))
            .count(&self.db)
            .await
            .map_err(|e| GradebookError::database_operation(format!("Failed to count gradebook entries: {e}")))
    }

    /// 统计引用某作业的成绩记录数
    pub async fn count_entries_by_assignment_impl(&self, assignment_id: i64) -> Result<u64> {
        GradebookEntries::find()
            .filter(Column::AssignmentId.eq(assignment_id))
            .count(&self.db)
            .await
            .map_err(|e| GradebookError::database_operation(format!("Failed to count gradebook entries: {e}")))
    }
}
