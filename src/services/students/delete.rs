use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::StudentService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn delete_student(
    service: &StudentService,
    request: &HttpRequest,
    student_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 先确认学生存在
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

    // 删除保护：有成绩记录引用时拒绝删除
    match storage.count_entries_by_student(student_id).await {
        Ok(0) => {}
        Ok(count) => {
            info!(
                "Refusing to delete student {}: {} gradebook entries reference it",
                student_id, count
            );
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::EntityInUse,
                "Student is referenced by gradebook entries and cannot be deleted",
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

    match storage.delete_student(student_id).await {
        Ok(true) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Student deleted successfully")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::StudentNotFound,
            "Student not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::StudentDeleteFailed,
                format!("Student deletion failed: {e}"),
            )),
        ),
    }
}
