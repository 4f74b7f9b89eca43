use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::cache::ObjectCache;
use crate::models::ApiResponse;
use crate::utils::jwt::JwtUtils;

/// 处理用户登出
/// 清除客户端的 refresh_token cookie，并移除该 access token 的缓存条目
pub async fn handle_logout(request: &HttpRequest) -> ActixResult<HttpResponse> {
    // 当前 access token 还在缓存里，让它立即失效
    if let Some(cache) = request.app_data::<actix_web::web::Data<Arc<dyn ObjectCache>>>()
        && let Some(token) = request
            .headers()
            .get("Authorization")
            .and_then(|h| h.to_str().ok())
            .and_then(|s| s.strip_prefix("Bearer "))
    {
        cache
            .remove(&crate::middlewares::require_jwt::user_cache_key(token))
            .await;
    }

    // 空 cookie（max_age=0）让浏览器删除 refresh_token
    let empty_cookie = JwtUtils::create_empty_refresh_token_cookie();

    Ok(HttpResponse::Ok()
        .cookie(empty_cookie)
        .json(ApiResponse::<()>::success_empty("Logout successful")))
}
