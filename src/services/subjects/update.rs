use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::SubjectService;
use crate::models::subjects::requests::UpdateSubjectRequest;
use crate::models::subjects::responses::SubjectResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn update_subject(
    service: &SubjectService,
    request: &HttpRequest,
    subject_id: i64,
    update_data: UpdateSubjectRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Some(ref name) = update_data.name
        && name.trim().is_empty()
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "Subject name must not be empty",
        )));
    }

    // 变更授课教师时，先确认教师存在
    if let Some(teacher_id) = update_data.teacher_id {
        match storage.get_teacher_by_id(teacher_id).await {
            Ok(Some(_)) => {}
            Ok(None) => {
                return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                    ErrorCode::TeacherNotFound,
                    "Teacher not found",
                )));
            }
            Err(e) => {
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("Failed to get teacher information: {e}"),
                    )),
                );
            }
        }
    }

    match storage.update_subject(subject_id, update_data).await {
        Ok(Some(subject)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            SubjectResponse { subject },
            "Subject updated successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::SubjectNotFound,
            "Subject not found",
        ))),
        Err(e) => {
            error!("Subject update failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Subject update failed: {e}"),
                )),
            )
        }
    }
}
