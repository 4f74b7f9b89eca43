use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::StudentService;
use crate::models::students::requests::CreateStudentRequest;
use crate::models::students::responses::StudentResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::{validate_birth_date, validate_email, validate_grade_level};

pub async fn create_student(
    service: &StudentService,
    request: &HttpRequest,
    student_data: CreateStudentRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 输入校验
    if let Err(resp) = validate_student_data(&student_data) {
        return Ok(resp);
    }

    match storage.create_student(student_data).await {
        Ok(student) => {
            info!("Student {} created successfully", student.id);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                StudentResponse { student },
                "Student created successfully",
            )))
        }
        Err(e) => {
            error!("Student creation failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::StudentCreateFailed,
                    format!("Student creation failed: {e}"),
                )),
            )
        }
    }
}

/// 输入校验辅助函数
fn validate_student_data(data: &CreateStudentRequest) -> Result<(), HttpResponse> {
    if data.first_name.trim().is_empty() || data.last_name.trim().is_empty() {
        return Err(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "First name and last name must not be empty",
        )));
    }

    if let Err(msg) = validate_grade_level(data.grade_level) {
        return Err(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg)));
    }

    if let Err(msg) = validate_email(&data.email) {
        return Err(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg)));
    }

    if let Err(msg) = validate_birth_date(&data.birth_date) {
        return Err(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg)));
    }

    Ok(())
}
