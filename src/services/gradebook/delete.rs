use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::GradebookService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn delete_entry(
    service: &GradebookService,
    request: &HttpRequest,
    entry_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_entry(entry_id).await {
        Ok(true) => {
            info!("Entry {} deleted", entry_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Entry deleted successfully")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::EntryNotFound,
            "Entry not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Entry deletion failed: {e}"),
            )),
        ),
    }
}
