//! 登录用户到学校成员的解析
//!
//! 学生侧的读接口都要先把当前用户解析成 students 表里的成员 ID，
//! 解析失败的三种情况分别对应不同的错误码：
//! 未登录 Unauthorized、无关联记录 NoRelation、关联角色不符 RoleMismatch。

use actix_web::{HttpRequest, HttpResponse};
use std::sync::Arc;

use crate::middlewares::RequireJWT;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;

/// 解析当前登录用户为指定角色的学校成员，返回成员 ID
pub(crate) async fn resolve_actor(
    storage: &Arc<dyn Storage>,
    request: &HttpRequest,
    expected_role: UserRole,
) -> Result<i64, HttpResponse> {
    let uid = match RequireJWT::extract_user_id(request) {
        Some(id) => id,
        None => {
            return Err(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Unauthorized: missing user id",
            )));
        }
    };

    match storage.get_relation_by_user_id(uid).await {
        Ok(Some(relation)) => {
            // 角色不符的关联不能用来代表该角色的成员
            if relation.role == expected_role {
                Ok(relation.actor_id)
            } else {
                Err(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                    ErrorCode::RoleMismatch,
                    "Linked school record does not match the required role",
                )))
            }
        }
        Ok(None) => Err(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::NoRelation,
            "No school record is linked to this account",
        ))),
        Err(e) => Err(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to resolve user relation: {e}"),
            )),
        ),
    }
}
