use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::TeacherService;
use crate::models::teachers::requests::CreateTeacherRequest;
use crate::models::teachers::responses::TeacherResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::{validate_birth_date, validate_email};

pub async fn create_teacher(
    service: &TeacherService,
    request: &HttpRequest,
    teacher_data: CreateTeacherRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 输入校验
    if let Err(resp) = validate_teacher_data(&teacher_data) {
        return Ok(resp);
    }

    match storage.create_teacher(teacher_data).await {
        Ok(teacher) => {
            info!("Teacher {} created successfully", teacher.id);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                TeacherResponse { teacher },
                "Teacher created successfully",
            )))
        }
        Err(e) => {
            error!("Teacher creation failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::TeacherCreateFailed,
                    format!("Teacher creation failed: {e}"),
                )),
            )
        }
    }
}

/// 输入校验辅助函数
fn validate_teacher_data(data: &CreateTeacherRequest) -> Result<(), HttpResponse> {
    if data.first_name.trim().is_empty() || data.last_name.trim().is_empty() {
        return Err(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "First name and last name must not be empty",
        )));
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
