use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::GradebookService;
use crate::models::gradebook::requests::GradeAssignmentRequest;
use crate::models::gradebook::responses::EntryResponse;
use crate::models::{ApiResponse, ErrorCode};

/// 评分入口。
///
/// 校验顺序固定：成绩范围 -> 学生存在 -> 科目存在 -> 作业存在 ->
/// 选课关系 -> 重复评分。多个条件同时不满足时，返回的错误由该顺序决定。
pub async fn grade_assignment(
    service: &GradebookService,
    request: &HttpRequest,
    grade_data: GradeAssignmentRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(msg) = grade_data.validate_grade() {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::GradeOutOfRange, msg)));
    }

    // 1. 学生存在
    match storage.get_student_by_id(grade_data.student_id).await {
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

    // 2. 科目存在
    match storage.get_subject_by_id(grade_data.subject_id).await {
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

    // 3. 作业存在
    match storage.get_assignment_by_id(grade_data.assignment_id).await {
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

    // 4. 学生必须选了该科目
    match storage
        .get_enrollment(grade_data.subject_id, grade_data.student_id)
        .await
    {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::NotEnrolled,
                "Student is not enrolled in this subject",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to check enrollment: {e}"),
                )),
            );
        }
    }

    // 5. 同一 (学生, 科目, 作业) 只允许一条成绩记录
    match storage
        .get_entry_by_triple(
            grade_data.student_id,
            grade_data.subject_id,
            grade_data.assignment_id,
        )
        .await
    {
        Ok(None) => {}
        Ok(Some(_)) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::DuplicateEntry,
                "Assignment has already been graded for this student",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to check existing entries: {e}"),
                )),
            );
        }
    }

    match storage.create_entry(grade_data).await {
        Ok(entry) => {
            info!(
                "Entry {} created: student {} got grade {} on assignment {}",
                entry.id, entry.student_id, entry.grade, entry.assignment_id
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                EntryResponse { entry },
                "Assignment graded successfully",
            )))
        }
        Err(e) => {
            error!("Entry creation failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::EntryCreateFailed,
                    format!("Entry creation failed: {e}"),
                )),
            )
        }
    }
}
