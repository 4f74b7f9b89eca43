use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::AssignmentService;
use crate::models::assignments::requests::CreateAssignmentRequest;
use crate::models::assignments::responses::AssignmentResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_deadline;

pub async fn create_assignment(
    service: &AssignmentService,
    request: &HttpRequest,
    assignment_data: CreateAssignmentRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if assignment_data.name.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "Assignment name must not be empty",
        )));
    }

    // 截止时间必须在未来
    if let Some(ref deadline) = assignment_data.deadline
        && let Err(msg) = validate_deadline(deadline)
    {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::DeadlineNotInFuture, msg)));
    }

    // 确认所属科目存在
    match storage.get_subject_by_id(assignment_data.subject_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::SubjectNotFound,
                "Subject not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to get subject information: {e}"),
                )),
            );
        }
    }

    match storage.create_assignment(assignment_data).await {
        Ok(assignment) => {
            info!("Assignment {} created successfully", assignment.id);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                AssignmentResponse { assignment },
                "Assignment created successfully",
            )))
        }
        Err(e) => {
            error!("Assignment creation failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::AssignmentCreateFailed,
                    format!("Assignment creation failed: {e}"),
                )),
            )
        }
    }
}
