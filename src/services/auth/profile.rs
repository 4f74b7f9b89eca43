use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::middlewares::RequireJWT;
use crate::models::auth::responses::ProfileResponse;
use crate::models::{ApiResponse, ErrorCode};

use super::AuthService;

pub async fn handle_profile(
    service: &AuthService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let user = match RequireJWT::extract_user(request) {
        Some(user) => user,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Unauthorized access, please login",
            )));
        }
    };

    // 管理员没有关联的学校成员，actor 为 None
    match storage.get_relation_by_user_id(user.id).await {
        Ok(relation) => {
            let actor = relation.and_then(|r| r.actor());
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                ProfileResponse { user, actor },
                "User information retrieved successfully",
            )))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to resolve user relation: {e}"),
            )),
        ),
    }
}
