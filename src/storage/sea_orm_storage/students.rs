//! 学生存储操作

use super::SeaOrmStorage;
use crate::entity::students::{ActiveModel, Column, Entity as Students};
use crate::errors::{GradebookError, Result};
use crate::models::{
    PaginationInfo, normalize_page_params,
    students::{
        entities::Student,
        requests::{CreateStudentRequest, StudentListQuery, UpdateStudentRequest},
        responses::StudentListResponse,
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建学生
    pub async fn create_student_impl(&self, req: CreateStudentRequest) -> Result<Student> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            first_name: Set(req.first_name),
            last_name: Set(req.last_name),
            grade_level: Set(req.grade_level),
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
            .map_err(|e| GradebookError::database_operation(format!("Failed to create student: {e}")))?;

        Ok(result.into_student())
    }

    /// 通过 ID 获取学生
    pub async fn get_student_by_id_impl(&self, id: i64) -> Result<Option<Student>> {
        let result = Students::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| GradebookError::database_operation(format!("Failed to query student: {e}")))?;

        Ok(result.map(|m| m.into_student()))
    }

    /// 分页列出学生
    pub async fn list_students_with_pagination_impl(
        &self,
        query: StudentListQuery,
    ) -> Result<StudentListResponse> {
        let (page, size) = normalize_page_params(query.page, query.size);

        let mut select = Students::find();

        // 年级筛选
        if let Some(grade_level) = query.grade_level {
            select = select.filter(Column::GradeLevel.eq(grade_level));
        }

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

        // 排序
        select = select.order_by_asc(Column::Id);

        // 分页查询
        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| GradebookError::database_operation(format!("Failed to count students: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| GradebookError::database_operation(format!("Failed to count student pages: {e}")))?;

        let students = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| GradebookError::database_operation(format!("Failed to query student list: {e}")))?;

        Ok(StudentListResponse {
            items: students.into_iter().map(|m| m.into_student()).collect(),
            pagination: PaginationInfo::new(page, size, total, pages),
        })
    }

    /// 更新学生信息
    pub async fn update_student_impl(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>> {
        // 先检查学生是否存在
        let existing = self.get_student_by_id_impl(id).await?;
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

        if let Some(grade_level) = update.grade_level {
            model.grade_level = Set(grade_level);
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
            .map_err(|e| GradebookError::database_operation(format!("Failed to update student: {e}")))?;

        self.get_student_by_id_impl(id).await
    }

    /// 删除学生
    pub async fn delete_student_impl(&self, id: i64) -> Result<bool> {
        let result = Students::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| GradebookError::database_operation(format!("Failed to delete student: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
