pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod students;
pub mod subjects;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::teachers::requests::{
    CreateTeacherRequest, TeacherListParams, UpdateTeacherRequest,
};
use crate::storage::Storage;

pub struct TeacherService {
    storage: Option<Arc<dyn Storage>>,
}

impl TeacherService {
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

    // 获取教师列表
    pub async fn list_teachers(
        &self,
        request: &HttpRequest,
        params: TeacherListParams,
    ) -> ActixResult<HttpResponse> {
        list::list_teachers(self, request, params).await
    }

    // 创建教师
    pub async fn create_teacher(
        &self,
        request: &HttpRequest,
        teacher_data: CreateTeacherRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_teacher(self, request, teacher_data).await
    }

    // 根据教师 ID 获取教师信息
    pub async fn get_teacher(
        &self,
        request: &HttpRequest,
        teacher_id: i64,
    ) -> ActixResult<HttpResponse> {
        get::get_teacher(self, request, teacher_id).await
    }

    // 更新教师信息
    pub async fn update_teacher(
        &self,
        request: &HttpRequest,
        teacher_id: i64,
        update_data: UpdateTeacherRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_teacher(self, request, teacher_id, update_data).await
    }

    // 删除教师
    pub async fn delete_teacher(
        &self,
        request: &HttpRequest,
        teacher_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_teacher(self, request, teacher_id).await
    }

    // 列出教师名下的科目
    pub async fn list_teacher_subjects(
        &self,
        request: &HttpRequest,
        teacher_id: i64,
    ) -> ActixResult<HttpResponse> {
        subjects::list_teacher_subjects(self, request, teacher_id).await
    }

    // 列出教师所有科目下的学生
    pub async fn list_teacher_students(
        &self,
        request: &HttpRequest,
        teacher_id: i64,
    ) -> ActixResult<HttpResponse> {
        students::list_teacher_students(self, request, teacher_id).await
    }
}
