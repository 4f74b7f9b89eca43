use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::AssignmentService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn delete_assignment(
    service: &AssignmentService,
    request: &HttpRequest,
    assignment_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 先确认作业存在
    match storage.get_assignment_by_id(assignment_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::AssignmentNotFound,
                "Assignment not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to get assignment information: {e}"),
                )),
            );
        }
    }

    // 删除保护：有成绩记录引用时拒绝删除
    match storage.count_entries_by_assignment(assignment_id).await {
        Ok(0) => {}
        Ok(count) => {
            info!(
                "Refusing to delete assignment {}: {} gradebook entries reference it",
                assignment_id, count
            );
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::EntityInUse,
                "Assignment is referenced by gradebook entries and cannot be deleted",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to check gradebook references: {e}"),
                )),
            );
        }
    }

    match storage.delete_assignment(assignment_id).await {
        Ok(true) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success_empty("Assignment deleted successfully"))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::AssignmentNotFound,
            "Assignment not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::AssignmentDeleteFailed,
                format!("Assignment deletion failed: {e}"),
            )),
        ),
    }
}
