use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::GradebookService;
use crate::middlewares::RequireJWT;
use crate::models::gradebook::requests::{EntryListParams, EntryListQuery};
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::actor::resolve_actor;

pub async fn list_entries(
    service: &GradebookService,
    request: &HttpRequest,
    params: EntryListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let mut query: EntryListQuery = params.into();

    // 学生只能看到自己的成绩，无视请求里的 student_id 过滤条件
    if RequireJWT::extract_user_role(request) == Some(UserRole::Student) {
        match resolve_actor(&storage, request, UserRole::Student).await {
            Ok(actor_id) => query.student_id = Some(actor_id),
            Err(response) => return Ok(response),
        }
    }

    match storage.list_entries_with_pagination(query).await {
        Ok(list) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            list,
            "Entry list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to list entries: {e}"),
            )),
        ),
    }
}
