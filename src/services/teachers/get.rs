use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::TeacherService;
use crate::models::teachers::responses::TeacherResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn get_teacher(
    service: &TeacherService,
    request: &HttpRequest,
    teacher_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_teacher_by_id(teacher_id).await {
        Ok(Some(teacher)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            TeacherResponse { teacher },
            "Teacher information retrieved successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::TeacherNotFound,
            "Teacher not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to get teacher information: {e}"),
            )),
        ),
    }
}
