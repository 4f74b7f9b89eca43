pub mod delete;
pub mod get;
pub mod grade;
pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::gradebook::requests::{EntryListParams, GradeAssignmentRequest};
use crate::storage::Storage;

pub struct GradebookService {
    storage: Option<Arc<dyn Storage>>,
}

impl GradebookService {
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

    // 评分：写入一条成绩记录
    pub async fn grade_assignment(
        &self,
        request: &HttpRequest,
        grade_data: GradeAssignmentRequest,
    ) -> ActixResult<HttpResponse> {
        grade::grade_assignment(self, request, grade_data).await
    }

    // 获取成绩记录列表
    pub async fn list_entries(
        &self,
        request: &HttpRequest,
        params: EntryListParams,
    ) -> ActixResult<HttpResponse> {
        list::list_entries(self, request, params).await
    }

    // 根据记录 ID 获取成绩记录
    pub async fn get_entry(
        &self,
        request: &HttpRequest,
        entry_id: i64,
    ) -> ActixResult<HttpResponse> {
        get::get_entry(self, request, entry_id).await
    }

    // 删除成绩记录
    pub async fn delete_entry(
        &self,
        request: &HttpRequest,
        entry_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_entry(self, request, entry_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::HttpMessage;
    use actix_web::body::to_bytes;
    use actix_web::http::StatusCode;
    use actix_web::test::TestRequest;

    use crate::models::common::pagination::PaginationQuery;
    use crate::models::users::entities::UserRole;
    use crate::models::users::requests::CreateUserRecord;
    use crate::models::ErrorCode;
    use crate::models::gradebook::requests::GradeAssignmentRequest;
    use crate::models::students::requests::CreateStudentRequest;
    use crate::models::subjects::requests::CreateSubjectRequest;
    use crate::models::assignments::entities::AssignmentKind;
    use crate::models::assignments::requests::CreateAssignmentRequest;
    use crate::storage::sea_orm_storage::SeaOrmStorage;

    async fn service() -> GradebookService {
        let storage = SeaOrmStorage::new_with_url("sqlite::memory:")
            .await
            .expect("in-memory storage");
        GradebookService {
            storage: Some(Arc::new(storage)),
        }
    }

    async fn seed_student(storage: &Arc<dyn Storage>) -> i64 {
        storage
            .create_student(CreateStudentRequest {
                first_name: "John".into(),
                last_name: "Doe".into(),
                grade_level: 7,
                email: "john@example.com".into(),
                address: None,
                phone: None,
                birth_date: chrono::DateTime::from_timestamp(1_000_000_000, 0).unwrap(),
            })
            .await
            .expect("create student")
            .id
    }

    async fn seed_subject(storage: &Arc<dyn Storage>) -> i64 {
        storage
            .create_subject(CreateSubjectRequest {
                name: "Algebra".into(),
                teacher_id: None,
            })
            .await
            .expect("create subject")
            .id
    }

    async fn seed_assignment(storage: &Arc<dyn Storage>, subject_id: i64) -> i64 {
        storage
            .create_assignment(CreateAssignmentRequest {
                subject_id,
                name: "Quadratics".into(),
                kind: AssignmentKind::Homework,
                description: None,
                deadline: None,
            })
            .await
            .expect("create assignment")
            .id
    }

    async fn response_code(response: HttpResponse) -> i32 {
        let body = to_bytes(response.into_body()).await.expect("body");
        let json: serde_json::Value = serde_json::from_slice(&body).expect("json body");
        json["code"].as_i64().expect("code field") as i32
    }

    fn grade_request(student_id: i64, subject_id: i64, assignment_id: i64) -> GradeAssignmentRequest {
        GradeAssignmentRequest {
            student_id,
            subject_id,
            assignment_id,
            grade: 4,
        }
    }

    #[tokio::test]
    async fn test_grade_out_of_range_rejected() {
        let service = service().await;
        let req = TestRequest::default().to_http_request();

        let mut data = grade_request(1, 1, 1);
        data.grade = 6;
        let response = service.grade_assignment(&req, data).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(response_code(response).await, ErrorCode::GradeOutOfRange as i32);
    }

    #[tokio::test]
    async fn test_missing_student_reported_before_other_checks() {
        let service = service().await;
        let req = TestRequest::default().to_http_request();

        // 学生、科目、作业都不存在，也没有选课关系；应先报学生不存在
        let response = service
            .grade_assignment(&req, grade_request(999, 999, 999))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(response_code(response).await, ErrorCode::StudentNotFound as i32);
    }

    #[tokio::test]
    async fn test_missing_assignment_reported_before_enrollment() {
        let service = service().await;
        let storage = service.storage.clone().unwrap();
        let req = TestRequest::default().to_http_request();

        let student_id = seed_student(&storage).await;
        let subject_id = seed_subject(&storage).await;

        // 作业不存在且学生未选课；存在性检查先于选课检查
        let response = service
            .grade_assignment(&req, grade_request(student_id, subject_id, 999))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response_code(response).await,
            ErrorCode::AssignmentNotFound as i32
        );
    }

    #[tokio::test]
    async fn test_grading_requires_enrollment() {
        let service = service().await;
        let storage = service.storage.clone().unwrap();
        let req = TestRequest::default().to_http_request();

        let student_id = seed_student(&storage).await;
        let subject_id = seed_subject(&storage).await;
        let assignment_id = seed_assignment(&storage, subject_id).await;

        let response = service
            .grade_assignment(&req, grade_request(student_id, subject_id, assignment_id))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(response_code(response).await, ErrorCode::NotEnrolled as i32);
    }

    #[tokio::test]
    async fn test_second_grade_for_same_triple_conflicts() {
        let service = service().await;
        let storage = service.storage.clone().unwrap();
        let req = TestRequest::default().to_http_request();

        let student_id = seed_student(&storage).await;
        let subject_id = seed_subject(&storage).await;
        let assignment_id = seed_assignment(&storage, subject_id).await;
        storage
            .enroll_student(subject_id, student_id)
            .await
            .expect("enroll");

        let first = service
            .grade_assignment(&req, grade_request(student_id, subject_id, assignment_id))
            .await
            .unwrap();
        assert_eq!(first.status(), StatusCode::CREATED);

        let second = service
            .grade_assignment(&req, grade_request(student_id, subject_id, assignment_id))
            .await
            .unwrap();
        assert_eq!(second.status(), StatusCode::CONFLICT);
        assert_eq!(response_code(second).await, ErrorCode::DuplicateEntry as i32);
    }

    fn entry_list_params() -> EntryListParams {
        EntryListParams {
            pagination: PaginationQuery::default(),
            student_id: None,
            subject_id: None,
            assignment_id: None,
        }
    }

    async fn response_json(response: HttpResponse) -> serde_json::Value {
        let body = to_bytes(response.into_body()).await.expect("body");
        serde_json::from_slice(&body).expect("json body")
    }

    async fn student_request(storage: &Arc<dyn Storage>, actor_id: i64) -> actix_web::HttpRequest {
        let user = storage
            .create_user(CreateUserRecord {
                username: format!("student{actor_id}"),
                password_hash: "unused".into(),
                role: UserRole::Student,
            })
            .await
            .expect("create user");
        storage
            .create_user_relation(user.id, UserRole::Student, actor_id)
            .await
            .expect("create relation");
        let req = TestRequest::default().to_http_request();
        req.extensions_mut().insert(user);
        req
    }

    #[tokio::test]
    async fn test_student_scope_rejects_mismatched_relation_role() {
        let service = service().await;
        let storage = service.storage.clone().unwrap();

        let user = storage
            .create_user(CreateUserRecord {
                username: "crossed01".into(),
                password_hash: "unused".into(),
                role: UserRole::Student,
            })
            .await
            .expect("create user");
        // 人为构造角色不一致的关联记录，正常流程不会产生
        storage
            .create_user_relation(user.id, UserRole::Teacher, 42)
            .await
            .expect("create relation");

        let req = TestRequest::default().to_http_request();
        req.extensions_mut().insert(user);

        let response = service.list_entries(&req, entry_list_params()).await.unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert_eq!(response_code(response).await, ErrorCode::RoleMismatch as i32);
    }

    #[tokio::test]
    async fn test_student_scope_overrides_requested_filter() {
        let service = service().await;
        let storage = service.storage.clone().unwrap();

        let own_id = seed_student(&storage).await;
        let other_id = seed_student(&storage).await;
        let subject_id = seed_subject(&storage).await;
        let assignment_id = seed_assignment(&storage, subject_id).await;
        for sid in [own_id, other_id] {
            storage.enroll_student(subject_id, sid).await.expect("enroll");
            storage
                .create_entry(grade_request(sid, subject_id, assignment_id))
                .await
                .expect("create entry");
        }

        let req = student_request(&storage, own_id).await;

        // 学生请求他人的成绩过滤条件，仍只返回自己的记录
        let mut params = entry_list_params();
        params.student_id = Some(other_id);
        let response = service.list_entries(&req, params).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = response_json(response).await;
        let items = json["data"]["items"].as_array().expect("items array");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["student_id"].as_i64(), Some(own_id));
    }
}
