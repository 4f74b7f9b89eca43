use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::UserService;
use crate::middlewares::RequireJWT;
use crate::models::users::requests::{ChangePasswordRequest, UpdateUserRecord};
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::password::{hash_password, verify_password};

pub async fn change_password(
    service: &UserService,
    request: &HttpRequest,
    password_data: ChangePasswordRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let user_id = match RequireJWT::extract_user_id(request) {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Unauthorized: missing user",
            )));
        }
    };

    if password_data.new_password.len() < 8 {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "New password must be at least 8 characters",
        )));
    }

    // 缓存的用户不带密码哈希，校验旧密码要用数据库里的记录
    let user = match storage.get_user_by_id(user_id).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::UserNotFound,
                "User not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to load user: {e}"),
                )),
            );
        }
    };

    if !verify_password(&password_data.old_password, &user.password_hash) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::IncorrectPassword,
            "Old password is incorrect",
        )));
    }

    let password_hash = match hash_password(&password_data.new_password) {
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

    match storage
        .update_user(
            user.id,
            UpdateUserRecord {
                password_hash: Some(password_hash),
                ..Default::default()
            },
        )
        .await
    {
        Ok(Some(_)) => {
            info!("User {} changed password", user.id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Password changed successfully")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::UserNotFound,
            "User not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Password change failed: {e}"),
            )),
        ),
    }
}
