pub mod change_password;
pub mod create_admin;
pub mod delete;
pub mod get;
pub mod list;
pub mod provision;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::users::requests::{
    ChangePasswordRequest, CreateAdminRequest, ProvisionAccountRequest, UserListParams,
};
use crate::storage::Storage;

pub struct UserService {
    storage: Option<Arc<dyn Storage>>,
}

impl UserService {
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

    // 获取用户列表
    pub async fn list_users(
        &self,
        request: &HttpRequest,
        params: UserListParams,
    ) -> ActixResult<HttpResponse> {
        list::list_users(self, request, params).await
    }

    // 为学校成员开通账号（生成用户名和初始密码）
    pub async fn provision_account(
        &self,
        request: &HttpRequest,
        provision_data: ProvisionAccountRequest,
    ) -> ActixResult<HttpResponse> {
        provision::provision_account(self, request, provision_data).await
    }

    // 创建管理员账号
    pub async fn create_admin(
        &self,
        request: &HttpRequest,
        admin_data: CreateAdminRequest,
    ) -> ActixResult<HttpResponse> {
        create_admin::create_admin(self, request, admin_data).await
    }

    // 修改当前用户密码
    pub async fn change_password(
        &self,
        request: &HttpRequest,
        password_data: ChangePasswordRequest,
    ) -> ActixResult<HttpResponse> {
        change_password::change_password(self, request, password_data).await
    }

    // 根据用户 ID 获取用户信息
    pub async fn get_user(&self, request: &HttpRequest, user_id: i64) -> ActixResult<HttpResponse> {
        get::get_user(self, request, user_id).await
    }

    // 删除用户（连带删除关联记录）
    pub async fn delete_user(
        &self,
        request: &HttpRequest,
        user_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_user(self, request, user_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::HttpMessage;
    use actix_web::body::to_bytes;
    use actix_web::http::StatusCode;
    use actix_web::test::TestRequest;

    use crate::models::ErrorCode;
    use crate::models::students::requests::CreateStudentRequest;
    use crate::models::users::entities::UserRole;
    use crate::storage::sea_orm_storage::SeaOrmStorage;

    async fn service() -> UserService {
        let storage = SeaOrmStorage::new_with_url("sqlite::memory:")
            .await
            .expect("in-memory storage");
        UserService {
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

    async fn response_json(response: HttpResponse) -> serde_json::Value {
        let body = to_bytes(response.into_body()).await.expect("body");
        serde_json::from_slice(&body).expect("json body")
    }

    fn provision_request(actor_id: i64) -> ProvisionAccountRequest {
        ProvisionAccountRequest {
            actor_id,
            first_name: "John".into(),
            last_name: "Doe".into(),
            role: UserRole::Student,
        }
    }

    #[tokio::test]
    async fn test_second_provision_for_same_actor_conflicts() {
        let service = service().await;
        let storage = service.storage.clone().unwrap();
        let student_id = seed_student(&storage).await;
        let req = TestRequest::default().to_http_request();

        let first = service
            .provision_account(&req, provision_request(student_id))
            .await
            .unwrap();
        assert_eq!(first.status(), StatusCode::CREATED);
        let json = response_json(first).await;
        let username = json["data"]["credentials"]["username"]
            .as_str()
            .expect("username");
        let suffix_len = username
            .chars()
            .rev()
            .take_while(|c| c.is_ascii_digit())
            .count();
        assert!(username.starts_with("johndoe"));
        assert!((2..=3).contains(&suffix_len));
        let password = json["data"]["credentials"]["password"]
            .as_str()
            .expect("password");
        assert_eq!(password.len(), 12);

        let second = service
            .provision_account(&req, provision_request(student_id))
            .await
            .unwrap();
        assert_eq!(second.status(), StatusCode::CONFLICT);
        let json = response_json(second).await;
        assert_eq!(
            json["code"].as_i64(),
            Some(ErrorCode::DuplicateAccount as i64)
        );
        // 冲突的请求不能留下用户行
        assert_eq!(storage.count_users().await.expect("count users"), 1);
    }

    #[tokio::test]
    async fn test_create_admin_with_taken_username_conflicts() {
        let service = service().await;
        let req = TestRequest::default().to_http_request();

        let first = service
            .create_admin(
                &req,
                CreateAdminRequest {
                    username: "principal".into(),
                },
            )
            .await
            .unwrap();
        assert_eq!(first.status(), StatusCode::CREATED);

        let second = service
            .create_admin(
                &req,
                CreateAdminRequest {
                    username: "principal".into(),
                },
            )
            .await
            .unwrap();
        assert_eq!(second.status(), StatusCode::CONFLICT);
        let json = response_json(second).await;
        assert_eq!(json["code"].as_i64(), Some(ErrorCode::UsernameTaken as i64));
    }

    #[tokio::test]
    async fn test_change_password_requires_correct_old_password() {
        let service = service().await;
        let storage = service.storage.clone().unwrap();
        let req = TestRequest::default().to_http_request();

        let created = service
            .create_admin(
                &req,
                CreateAdminRequest {
                    username: "registrar".into(),
                },
            )
            .await
            .unwrap();
        assert_eq!(created.status(), StatusCode::CREATED);
        let json = response_json(created).await;
        let initial_password = json["data"]["credentials"]["password"]
            .as_str()
            .expect("password")
            .to_string();

        let user = storage
            .get_user_by_username("registrar")
            .await
            .expect("query user")
            .expect("user exists");
        let auth_req = TestRequest::default().to_http_request();
        auth_req.extensions_mut().insert(user);

        let rejected = service
            .change_password(
                &auth_req,
                ChangePasswordRequest {
                    old_password: "not-the-password".into(),
                    new_password: "replacement123".into(),
                },
            )
            .await
            .unwrap();
        assert_eq!(rejected.status(), StatusCode::BAD_REQUEST);
        let json = response_json(rejected).await;
        assert_eq!(
            json["code"].as_i64(),
            Some(ErrorCode::IncorrectPassword as i64)
        );

        let accepted = service
            .change_password(
                &auth_req,
                ChangePasswordRequest {
                    old_password: initial_password,
                    new_password: "replacement123".into(),
                },
            )
            .await
            .unwrap();
        assert_eq!(accepted.status(), StatusCode::OK);
    }
}
