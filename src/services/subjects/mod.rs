pub mod create;
pub mod delete;
pub mod enroll;
pub mod get;
pub mod list;
pub mod students;
pub mod unenroll;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::subjects::requests::{
    CreateSubjectRequest, SubjectListParams, UpdateSubjectRequest,
};
use crate::storage::Storage;

pub struct SubjectService {
    storage: Option<Arc<dyn Storage>>,
}

impl SubjectService {
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

    // 获取科目列表
    pub async fn list_subjects(
        &self,
        request: &HttpRequest,
        params: SubjectListParams,
    ) -> ActixResult<HttpResponse> {
        list::list_subjects(self, request, params).await
    }

    // 创建科目
    pub async fn create_subject(
        &self,
        request: &HttpRequest,
        subject_data: CreateSubjectRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_subject(self, request, subject_data).await
    }

    // 根据科目 ID 获取科目信息
    pub async fn get_subject(
        &self,
        request: &HttpRequest,
        subject_id: i64,
    ) -> ActixResult<HttpResponse> {
        get::get_subject(self, request, subject_id).await
    }

    // 更新科目信息
    pub async fn update_subject(
        &self,
        request: &HttpRequest,
        subject_id: i64,
        update_data: UpdateSubjectRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_subject(self, request, subject_id, update_data).await
    }

    // 删除科目（有成绩记录引用时拒绝）
    pub async fn delete_subject(
        &self,
        request: &HttpRequest,
        subject_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_subject(self, request, subject_id).await
    }

    // 学生选课（幂等）
    pub async fn enroll_student(
        &self,
        request: &HttpRequest,
        subject_id: i64,
        student_id: i64,
    ) -> ActixResult<HttpResponse> {
        enroll::enroll_student(self, request, subject_id, student_id).await
    }

    // 学生退课（幂等）
    pub async fn unenroll_student(
        &self,
        request: &HttpRequest,
        subject_id: i64,
        student_id: i64,
    ) -> ActixResult<HttpResponse> {
        unenroll::unenroll_student(self, request, subject_id, student_id).await
    }

    // 列出科目下的学生
    pub async fn list_subject_students(
        &self,
        request: &HttpRequest,
        subject_id: i64,
    ) -> ActixResult<HttpResponse> {
        students::list_subject_students(self, request, subject_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use actix_web::http::StatusCode;
    use actix_web::test::TestRequest;

    use crate::models::ErrorCode;
    use crate::models::assignments::entities::AssignmentKind;
    use crate::models::assignments::requests::CreateAssignmentRequest;
    use crate::models::gradebook::requests::GradeAssignmentRequest;
    use crate::models::students::requests::CreateStudentRequest;
    use crate::storage::sea_orm_storage::SeaOrmStorage;

    async fn service() -> SubjectService {
        let storage = SeaOrmStorage::new_with_url("sqlite::memory:")
            .await
            .expect("in-memory storage");
        SubjectService {
            storage: Some(Arc::new(storage)),
        }
    }

    async fn response_code(response: HttpResponse) -> i32 {
        let body = to_bytes(response.into_body()).await.expect("body");
        let json: serde_json::Value = serde_json::from_slice(&body).expect("json body");
        json["code"].as_i64().expect("code field") as i32
    }

    #[tokio::test]
    async fn test_delete_refused_while_entries_reference_subject() {
        let service = service().await;
        let storage = service.storage.clone().unwrap();
        let req = TestRequest::default().to_http_request();

        let student_id = storage
            .create_student(CreateStudentRequest {
                first_name: "Jane".into(),
                last_name: "Doe".into(),
                grade_level: 8,
                email: "jane@example.com".into(),
                address: None,
                phone: None,
                birth_date: chrono::DateTime::from_timestamp(1_000_000_000, 0).unwrap(),
            })
            .await
            .expect("create student")
            .id;
        let subject_id = storage
            .create_subject(CreateSubjectRequest {
                name: "Chemistry".into(),
                teacher_id: None,
            })
            .await
            .expect("create subject")
            .id;
        let assignment_id = storage
            .create_assignment(CreateAssignmentRequest {
                subject_id,
                name: "Lab report".into(),
                kind: AssignmentKind::Homework,
                description: None,
                deadline: None,
            })
            .await
            .expect("create assignment")
            .id;
        storage
            .enroll_student(subject_id, student_id)
            .await
            .expect("enroll");
        storage
            .create_entry(GradeAssignmentRequest {
                student_id,
                subject_id,
                assignment_id,
                grade: 5,
            })
            .await
            .expect("create entry");

        let response = service.delete_subject(&req, subject_id).await.unwrap();
        assert_eq!(response.status(), StatusCode::CONFLICT);
        assert_eq!(response_code(response).await, ErrorCode::EntityInUse as i32);

        // 被拒绝的删除不应产生任何效果
        let still_there = storage.get_subject_by_id(subject_id).await.unwrap();
        assert!(still_there.is_some());
    }

    #[tokio::test]
    async fn test_delete_succeeds_without_referencing_entries() {
        let service = service().await;
        let storage = service.storage.clone().unwrap();
        let req = TestRequest::default().to_http_request();

        let subject_id = storage
            .create_subject(CreateSubjectRequest {
                name: "History".into(),
                teacher_id: None,
            })
            .await
            .expect("create subject")
            .id;

        let response = service.delete_subject(&req, subject_id).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(
            storage
                .get_subject_by_id(subject_id)
                .await
                .unwrap()
                .is_none()
        );
    }
}
