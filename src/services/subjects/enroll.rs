use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::SubjectService;
use crate::models::subjects::responses::SubjectMembershipResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn enroll_student(
    service: &SubjectService,
    request: &HttpRequest,
    subject_id: i64,
    student_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 先确认科目存在
    let subject = match storage.get_subject_by_id(subject_id).await {
        Ok(Some(subject)) => subject,
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
    };

    // 再确认学生存在
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

    // 选课本身幂等，重复选课返回现有记录
    if let Err(e) = storage.enroll_student(subject_id, student_id).await {
        error!("Enrollment failed: {}", e);
        return Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Enrollment failed: {e}"),
            )),
        );
    }
    info!("Student {} enrolled in subject {}", student_id, subject_id);

    match storage.list_students_by_subject(subject_id).await {
        Ok(students) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            SubjectMembershipResponse { subject, students },
            "Student enrolled successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to list subject students: {e}"),
            )),
        ),
    }
}
