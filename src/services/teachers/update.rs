use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::TeacherService;
use crate::models::teachers::requests::UpdateTeacherRequest;
use crate::models::teachers::responses::TeacherResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::{validate_birth_date, validate_email};

pub async fn update_teacher(
    service: &TeacherService,
    request: &HttpRequest,
    teacher_id: i64,
    update_data: UpdateTeacherRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 只校验提交的字段
    if let Some(ref email) = update_data.email
        && let Err(msg) = validate_email(email)
    {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg)));
    }

    if let Some(ref birth_date) = update_data.birth_date
        && let Err(msg) = validate_birth_date(birth_date)
    {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg)));
    }

    match storage.update_teacher(teacher_id, update_data).await {
        Ok(Some(teacher)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            TeacherResponse { teacher },
            "Teacher updated successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::TeacherNotFound,
            "Teacher not found",
        ))),
        Err(e) => {
            error!("Teacher update failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Teacher update failed: {e}"),
                )),
            )
        }
    }
}
