use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::UserService;
use crate::models::users::entities::UserRole;
use crate::models::users::requests::{CreateAdminRequest, CreateUserRecord};
use crate::models::users::responses::{InitialCredentials, ProvisionAccountResponse};
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::password::hash_password;
use crate::utils::random_code::generate_random_password;
use crate::utils::validate::validate_username;

pub async fn create_admin(
    service: &UserService,
    request: &HttpRequest,
    admin_data: CreateAdminRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(msg) = validate_username(&admin_data.username) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::UsernameInvalid, msg)));
    }

    // 管理员用户名是指定的，不生成，先查重
    match storage.get_user_by_username(&admin_data.username).await {
        Ok(None) => {}
        Ok(Some(_)) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::UsernameTaken,
                "Username is already taken",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to check username availability: {e}"),
                )),
            );
        }
    }

    let password = generate_random_password(12);
    let password_hash = match hash_password(&password) {
        Ok(hash) => hash,
        Err(e) => {
            error!("Password hashing failed: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Password hashing failed: {e}"),
                )),
            );
        }
    };

    // 管理员不是学校成员，不写关联表
    match storage
        .create_user(CreateUserRecord {
            username: admin_data.username.clone(),
            password_hash,
            role: UserRole::Admin,
        })
        .await
    {
        Ok(user) => {
            info!("Admin account {} created", user.id);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                ProvisionAccountResponse {
                    user,
                    credentials: InitialCredentials {
                        username: admin_data.username,
                        password,
                    },
                },
                "Admin account created successfully",
            )))
        }
        Err(e) => {
            error!("Admin creation failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::UserCreateFailed,
                    format!("Admin creation failed: {e}"),
                )),
            )
        }
    }
}
