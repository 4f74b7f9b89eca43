use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::GradebookService;
use crate::middlewares::RequireJWT;
use crate::models::gradebook::responses::EntryResponse;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::actor::resolve_actor;

pub async fn get_entry(
    service: &GradebookService,
    request: &HttpRequest,
    entry_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let entry = match storage.get_entry_by_id(entry_id).await {
        Ok(Some(entry)) => entry,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::EntryNotFound,
                "Entry not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to get entry information: {e}"),
                )),
            );
        }
    };

    // 学生只能查看自己的成绩记录
    if RequireJWT::extract_user_role(request) == Some(UserRole::Student) {
        let actor_id = match resolve_actor(&storage, request, UserRole::Student).await {
            Ok(actor_id) => actor_id,
            Err(response) => return Ok(response),
        };
        if actor_id != entry.student_id {
            return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                ErrorCode::Forbidden,
                "Students may only view their own entries",
            )));
        }
    }

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        EntryResponse { entry },
        "Entry information retrieved successfully",
    )))
}
