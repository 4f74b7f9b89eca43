use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::StudentService;
use crate::models::students::requests::UpdateStudentRequest;
use crate::models::students::responses::StudentResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::{validate_birth_date, validate_email, validate_grade_level};

pub async fn update_student(
    service: &StudentService,
    request: &HttpRequest,
    student_id: i64,
    update_data: UpdateStudentRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 只校验提交的字段
    if let Err(resp) = validate_update_data(&update_data) {
        return Ok(resp);
    }

    match storage.update_student(student_id, update_data).await {
        Ok(Some(student)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            StudentResponse { student },
            "Student updated successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::StudentNotFound,
            "Student not found",
        ))),
        Err(e) => {
            error!("Student update failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Student update failed: {e}"),
                )),
            )
        }
    }
}

/// 输入校验辅助函数
fn validate_update_data(data: &UpdateStudentRequest) -> Result<(), HttpResponse> {
    if let Some(grade_level) = data.grade_level
        && let Err(msg) = validate_grade_level(grade_level)
    {
        return Err(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg)));
    }

    if let Some(ref email) = data.email
        && let Err(msg) = validate_email(email)
    {
        return Err(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg)));
    }

    if let Some(ref birth_date) = data.birth_date
        && let Err(msg) = validate_birth_date(birth_date)
    {
        return Err(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg)));
    }

    Ok(())
}
