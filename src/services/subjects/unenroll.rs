use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::SubjectService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn unenroll_student(
    service: &SubjectService,
    request: &HttpRequest,
    subject_id: i64,
    student_id: i64,
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

    // 退课幂等：记录不存在时同样视为成功
    match storage.unenroll_student(subject_id, student_id).await {
        Ok(removed) => {
            if removed {
                info!(
                    "Student {} unenrolled from subject {}",
                    student_id, subject_id
                );
            }
            Ok(HttpResponse::Ok()
                .json(ApiResponse::success_empty("Student unenrolled successfully")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Unenrollment failed: {e}"),
            )),
        ),
    }
}
