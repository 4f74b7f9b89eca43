use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StudentService;
use crate::middlewares::RequireJWT;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::actor::resolve_actor;

pub async fn list_student_subjects(
    service: &StudentService,
    request: &HttpRequest,
    student_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 学生只能查看自己的选课
    if RequireJWT::extract_user_role(request) == Some(UserRole::Student) {
        let actor_id = match resolve_actor(&storage, request, UserRole::Student).await {
            Ok(actor_id) => actor_id,
            Err(response) => return Ok(response),
        };
        if actor_id != student_id {
            return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                ErrorCode::Forbidden,
                "Students may only view their own subjects",
            )));
        }
    }

    // 确认学生存在
    match storage.get_student_by_id(student_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::StudentNotFound,
                "Student not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to get student information: {e}"),
                )),
            );
        }
    }

    match storage.list_subjects_by_student(student_id).await {
        Ok(subjects) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            subjects,
            "Student subjects retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to list student subjects: {e}"),
            )),
        ),
    }
}
