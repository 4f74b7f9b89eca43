//! 请求参数解析错误处理
//!
//! 将 actix-web 的 JSON / Query 反序列化错误转换为统一的
//! `ApiResponse` 400 响应，而非默认的纯文本错误。

use actix_web::error::{InternalError, JsonPayloadError, QueryPayloadError};
use actix_web::{Error, HttpRequest, HttpResponse};

use crate::models::{ApiResponse, ErrorCode};

/// JSON 请求体解析错误处理器，注册到 `web::JsonConfig`
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> Error {
    let detail = err.to_string();
    let response = HttpResponse::BadRequest().json(ApiResponse::error_empty(
        ErrorCode::BadRequest,
        format!("Invalid JSON body: {detail}"),
    ));
    InternalError::from_response(err, response).into()
}

/// 查询字符串解析错误处理器，注册到 `web::QueryConfig`
pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> Error {
    let detail = err.to_string();
    let response = HttpResponse::BadRequest().json(ApiResponse::error_empty(
        ErrorCode::BadRequest,
        format!("Invalid query parameters: {detail}"),
    ));
    InternalError::from_response(err, response).into()
}
