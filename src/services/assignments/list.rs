use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AssignmentService;
use crate::models::assignments::requests::AssignmentListParams;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_assignments(
    service: &AssignmentService,
    request: &HttpRequest,
    params: AssignmentListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_assignments_with_pagination(params.into()).await {
        Ok(list) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            list,
            "Assignment list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to list assignments: {e}"),
            )),
        ),
    }
}
