use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::SubjectService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn delete_subject(
    service: &SubjectService,
    request: &HttpRequest,
    subject_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 先确认科目存在
    match storage.get_subject_by_id(subject_id).await {
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

    // 删除保护：有成绩记录引用时拒绝删除
    match storage.count_entries_by_subject(subject_id).await {
        Ok(0) => {}
        Ok(count) => {
            info!(
                "Refusing to delete subject {}: {} gradebook entries reference it",
                subject_id, count
            );
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::EntityInUse,
                "Subject is referenced by gradebook entries and cannot be deleted",
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

    match storage.delete_subject(subject_id).await {
        Ok(true) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Subject deleted successfully")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::SubjectNotFound,
            "Subject not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::SubjectDeleteFailed,
                format!("Subject deletion failed: {e}"),
            )),
        ),
    }
}
