use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::AssignmentService;
use crate::models::assignments::requests::UpdateAssignmentRequest;
use crate::models::assignments::responses::AssignmentResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_deadline;

pub async fn update_assignment(
    service: &AssignmentService,
    request: &HttpRequest,
    assignment_id: i64,
    update_data: UpdateAssignmentRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Some(ref name) = update_data.name
        && name.trim().is_empty()
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "Assignment name must not be empty",
        )));
    }

    // 新的截止时间仍须在未来
    if let Some(ref deadline) = update_data.deadline
        && let Err(msg) = validate_deadline(deadline)
    {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::DeadlineNotInFuture, msg)));
    }

    match storage.update_assignment(assignment_id, update_data).await {
        Ok(Some(assignment)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            AssignmentResponse { assignment },
            "Assignment updated successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::AssignmentNotFound,
            "Assignment not found",
        ))),
        Err(e) => {
            error!("Assignment update failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Assignment update failed: {e}"),
                )),
            )
        }
    }
}
