use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::SubjectService;
use crate::models::subjects::requests::CreateSubjectRequest;
use crate::models::subjects::responses::SubjectResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn create_subject(
    service: &SubjectService,
    request: &HttpRequest,
    subject_data: CreateSubjectRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if subject_data.name.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "Subject name must not be empty",
        )));
    }

    // 指定了授课教师时，先确认教师存在
    if let Some(teacher_id) = subject_data.teacher_id {
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

    match storage.create_subject(subject_data).await {
        Ok(subject) => {
            info!("Subject {} created successfully", subject.id);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                SubjectResponse { subject },
                "Subject created successfully",
            )))
        }
        Err(e) => {
            error!("Subject creation failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::SubjectCreateFailed,
                    format!("Subject creation failed: {e}"),
                )),
            )
        }
    }
}
