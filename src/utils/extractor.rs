//! 路径参数安全提取器
//!
//! 从 URL 路径中提取 i64 主键，拒绝非数字或非正数的输入，
//! 统一返回 `ApiResponse` 格式的 400 响应。

use actix_web::dev::Payload;
use actix_web::{Error, FromRequest, HttpRequest, HttpResponse, error::InternalError};
use std::future::{Ready, ready};

use crate::models::{ApiResponse, ErrorCode};

/// 定义一个从指定路径参数提取正整数 i64 的提取器类型
#[macro_export]
macro_rules! define_safe_i64_extractor {
    ($name:ident, $param:expr) => {
        #[derive(Debug, Clone, Copy)]
        pub struct $name(pub i64);

        impl actix_web::FromRequest for $name {
            type Error = actix_web::Error;
            type Future = std::future::Ready<Result<Self, Self::Error>>;

            fn from_request(
                req: &actix_web::HttpRequest,
                _payload: &mut actix_web::dev::Payload,
            ) -> Self::Future {
                std::future::ready(
                    $crate::utils::extractor::extract_positive_i64(req, $param).map($name),
                )
            }
        }

        impl std::ops::Deref for $name {
            type Target = i64;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }
    };
}

/// 解析路径参数为正 i64，失败时构造 400 响应
pub fn extract_positive_i64(req: &HttpRequest, param: &str) -> Result<i64, Error> {
    let raw = req.match_info().get(param).unwrap_or_default();
    match raw.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => {
            let response = HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::BadRequest,
                format!("Invalid path parameter '{param}': must be a positive integer"),
            ));
            Err(InternalError::from_response("invalid path parameter", response).into())
        }
    }
}

/// 通用 `{id}` 提取器，用于单参数路径
#[derive(Debug, Clone, Copy)]
pub struct SafeIdI64(pub i64);

impl FromRequest for SafeIdI64 {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(extract_positive_i64(req, "id").map(SafeIdI64))
    }
}

impl std::ops::Deref for SafeIdI64 {
    type Target = i64;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

define_safe_i64_extractor!(SafeStudentIdI64, "student_id");
define_safe_i64_extractor!(SafeTeacherIdI64, "teacher_id");
define_safe_i64_extractor!(SafeSubjectIdI64, "subject_id");
define_safe_i64_extractor!(SafeAssignmentIdI64, "assignment_id");
define_safe_i64_extractor!(SafeEntryIdI64, "entry_id");
