//! 选课关联存储操作

use super::SeaOrmStorage;
use crate::entity::enrollments::{ActiveModel, Column, Entity as Enrollments};
use crate::entity::students::{Column as StudentColumn, Entity as Students};
use crate::entity::subjects::{Column as SubjectColumn, Entity as Subjects};
use crate::errors::{GradebookError, Result};
use crate::models::{
    students::entities::Student,
    subjects::entities::{Enrollment, Subject},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 学生选课
    ///
    /// 幂等操作：已有选课记录时直接返回现有记录。
    pub async fn enroll_student_impl(
        &self,
        subject_id: i64,
        student_id: i64,
    ) -> Result<Enrollment> {
        if let Some(existing) = self.get_enrollment_impl(subject_id, student_id).await? {
            return Ok(existing);
        }

        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            subject_id: Set(subject_id),
            student_id: Set(student_id),
            enrolled_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| GradebookError::database_operation(format!("Failed to enroll student: {e}")))?;

        Ok(result.into_enrollment())
    }

    /// 学生退课
    pub async fn unenroll_student_impl(&self, subject_id: i64, student_id: i64) -> Result<bool> {
        let result = Enrollments::delete_many()
            .filter(
                Condition::all()
                    .add(Column::SubjectId.eq(subject_id))
                    .add(Column::StudentId.eq(student_id)),
            )
            .exec(&self.db)
            .await
            .map_err(|e| GradebookError::database_operation(format!("Failed to unenroll student: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 查询选课记录
    pub async fn get_enrollment_impl(
        &self,
        subject_id: i64,
        student_id: i64,
    ) -> Result<Option<Enrollment>> {
        let result = Enrollments::find()
            .filter(
                Condition::all()
                    .add(Column::SubjectId.eq(subject_id))
                    .add(Column::StudentId.eq(student_id)),
            )
            .one(&self.db)
            .await
            .map_err(|e| GradebookError::database_operation(format!("Failed to query enrollments: {e}")))?;

        Ok(result.map(|m| m.into_enrollment()))
    }

    /// 列出科目下的学生，按 ID 排序
    pub async fn list_students_by_subject_impl(&self, subject_id: i64) -> Result<Vec<Student>> {
        let records = Enrollments::find()
            .filter(Column::SubjectId.eq(subject_id))
            .all(&self.db)
            .await
            .map_err(|e| GradebookError::database_operation(format!("Failed to query enrollments: {e}")))?;

        let student_ids: Vec<i64> = records.iter().map(|e| e.student_id).collect();

        if student_ids.is_empty() {
            return Ok(vec![]);
        }

        let students = Students::find()
            .filter(StudentColumn::Id.is_in(student_ids))
            .order_by_asc(StudentColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| GradebookError::database_operation(format!("Failed to query student list: {e}")))?;

        Ok(students.into_iter().map(|m| m.into_student()).collect())
    }

    /// 列出学生选的科目，按 ID 排序
    pub async fn list_subjects_by_student_impl(&self, student_id: i64) -> Result<Vec<Subject>> {
        let records = Enrollments::find()
            .filter(Column::StudentId.eq(student_id))
            .all(&self.db)
            .await
            .map_err(|e| GradebookError::database_operation(format!("Failed to query enrollments: {e}")))?;

        let subject_ids: Vec<i64> = records.iter().map(|e| e.subject_id).collect();

        if subject_ids.is_empty() {
            return Ok(vec![]);
        }

        let subjects = Subjects::find()
            .filter(SubjectColumn::Id.is_in(subject_ids))
            .order_by_asc(SubjectColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| GradebookError::database_operation(format!("Failed to query subject list: {e}")))?;

        Ok(subjects.into_iter().map(|m| m.into_subject()).collect())
    }

    /// 列出教师所有科目下的学生
    ///
    /// 学生可能同时选了同一教师的多个科目，结果去重并按 ID 排序。
    pub async fn list_students_by_teacher_impl(&self, teacher_id: i64) -> Result<Vec<Student>> {
        let subjects = Subjects::find()
            .filter(SubjectColumn::TeacherId.eq(teacher_id))
            .all(&self.db)
            .await
            .map_err(|e| GradebookError::database_operation(format!("Failed to query teacher subjects: {e}")))?;

        let subject_ids: Vec<i64> = subjects.iter().map(|s| s.id).collect();

        if subject_ids.is_empty() {
            return Ok(vec![]);
        }

        let records = Enrollments::find()
            .filter(Column::SubjectId.is_in(subject_ids))
            .all(&self.db)
            .await
            .map_err(|e| GradebookError::database_operation(format!("Failed to query enrollments: {e}")))?;

        let mut student_ids: Vec<i64> = records.iter().map(|e| e.student_id).collect();
        student_ids.sort_unstable();
        student_ids.dedup();

        if student_ids.is_empty() {
            return Ok(vec![]);
        }

        let students = Students::find()
            .filter(StudentColumn::Id.is_in(student_ids))
            .order_by_asc(StudentColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| GradebookError::database_operation(format!("Failed to query student list: {e}")))?;

        Ok(students.into_iter().map(|m| m.into_student()).collect())
    }
}
