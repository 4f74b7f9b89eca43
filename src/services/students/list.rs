use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StudentService;
use crate::models::students::requests::StudentListParams;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_students(
    service: &StudentService,
    request: &HttpRequest,
    params: StudentListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_students_with_pagination(params.into()).await {
        Ok(list) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            list,
            "Student list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to list students: {e}"),
            )),
        ),
    }
}
