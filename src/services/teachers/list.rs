use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::TeacherService;
use crate::models::teachers::requests::TeacherListParams;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_teachers(
    service: &TeacherService,
    request: &HttpRequest,
    params: TeacherListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_teachers_with_pagination(params.into()).await {
        Ok(list) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            list,
            "Teacher list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to list teachers: {e}"),
            )),
        ),
    }
}
