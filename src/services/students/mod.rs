pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod subjects;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::students::requests::{
    CreateStudentRequest, StudentListParams, UpdateStudentRequest,
};
use crate::storage::Storage;

pub struct StudentService {
    storage: Option<Arc<dyn Storage>>,
}

impl StudentService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 获取学生列表
    pub async fn list_students(
        &self,
        request: &HttpRequest,
        params: StudentListParams,
    ) -> ActixResult<HttpResponse> {
        list::list_students(self, request, params).await
    }

    // 创建学生
    pub async fn create_student(
        &self,
        request: &HttpRequest,
        student_data: CreateStudentRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_student(self, request, student_data).await
    }

    // 根据学生 ID 获取学生信息
    pub async fn get_student(
        &self,
        request: &HttpRequest,
        student_id: i64,
    ) -> ActixResult<HttpResponse> {
        get::get_student(self, request, student_id).await
    }

    // 更新学生信息
    pub async fn update_student(
        &self,
        request: &HttpRequest,
        student_id: i64,
        update_data: UpdateStudentRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_student(self, request, student_id, update_data).await
    }

    // 删除学生（有成绩记录引用时拒绝）
    pub async fn delete_student(
        &self,
        request: &HttpRequest,
        student_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_student(self, request, student_id).await
    }

    // 列出学生选的科目
    pub async fn list_student_subjects(
        &self,
        request: &HttpRequest,
        student_id: i64,
    ) -> ActixResult<HttpResponse> {
        subjects::list_student_subjects(self, request, student_id).await
    }
}
