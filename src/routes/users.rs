use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::users::entities::UserRole;
use crate::models::users::requests::{
    ChangePasswordRequest, CreateAdminRequest, ProvisionAccountRequest, UserListParams,
};
use crate::services::UserService;
use crate::utils::SafeIdI64;

// 懒加载的全局 UserService 实例
static USER_SERVICE: Lazy<UserService> = Lazy::new(UserService::new_lazy);

// HTTP处理程序
pub async fn list_users(
    req: HttpRequest,
    query: web::Query<UserListParams>,
) -> ActixResult<HttpResponse> {
    USER_SERVICE.list_users(&req, query.into_inner()).await
}

pub async fn provision_account(
    req: HttpRequest,
    provision_data: web::Json<ProvisionAccountRequest>,
) -> ActixResult<HttpResponse> {
    USER_SERVICE
        .provision_account(&req, provision_data.into_inner())
        .await
}

pub async fn create_admin(
    req: HttpRequest,
    admin_data: web::Json<CreateAdminRequest>,
) -> ActixResult<HttpResponse> {
    USER_SERVICE.create_admin(&req, admin_data.into_inner()).await
}

pub async fn change_password(
    req: HttpRequest,
    password_data: web::Json<ChangePasswordRequest>,
) -> ActixResult<HttpResponse> {
    USER_SERVICE
        .change_password(&req, password_data.into_inner())
        .await
}

pub async fn get_user(req: HttpRequest, user_id: SafeIdI64) -> ActixResult<HttpResponse> {
    USER_SERVICE.get_user(&req, user_id.0).await
}

pub async fn delete_user(req: HttpRequest, user_id: SafeIdI64) -> ActixResult<HttpResponse> {
    USER_SERVICE.delete_user(&req, user_id.0).await
}

// 配置路由
pub fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/users")
            .wrap(middlewares::RequireJWT)
            // 任何登录用户都可以改自己的密码
            .route("/me/password", web::put().to(change_password))
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles()))
                    .route("", web::get().to(list_users))
                    .route("/provision", web::post().to(provision_account))
                    .route("/admins", web::post().to(create_admin))
                    .route("/{id}", web::get().to(get_user))
                    .route("/{id}", web::delete().to(delete_user)),
            ),
    );
}
