use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SubjectService;
use crate::models::subjects::requests::SubjectListParams;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_subjects(
    service: &SubjectService,
    request: &HttpRequest,
    params: SubjectListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_subjects_with_pagination(params.into()).await {
        Ok(list) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            list,
            "Subject list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to list subjects: {e}"),
            )),
        ),
    }
}
