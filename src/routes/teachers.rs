use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::teachers::requests::{
    CreateTeacherRequest, TeacherListParams, UpdateTeacherRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::TeacherService;
use crate::utils::SafeTeacherIdI64;

// 懒加载的全局 TeacherService 实例
static TEACHER_SERVICE: Lazy<TeacherService> = Lazy::new(TeacherService::new_lazy);

// HTTP处理程序
pub async fn list_teachers(
    req: HttpRequest,
    query: web::Query<TeacherListParams>,
) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE.list_teachers(&req, query.into_inner()).await
}

pub async fn create_teacher(
    req: HttpRequest,
    teacher_data: web::Json<CreateTeacherRequest>,
) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE
        .create_teacher(&req, teacher_data.into_inner())
        .await
}

pub async fn get_teacher(
    req: HttpRequest,
    teacher_id: SafeTeacherIdI64,
) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE.get_teacher(&req, teacher_id.0).await
}

pub async fn update_teacher(
    req: HttpRequest,
    teacher_id: SafeTeacherIdI64,
    update_data: web::Json<UpdateTeacherRequest>,
) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE
        .update_teacher(&req, teacher_id.0, update_data.into_inner())
        .await
}

pub async fn delete_teacher(
    req: HttpRequest,
    teacher_id: SafeTeacherIdI64,
) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE.delete_teacher(&req, teacher_id.0).await
}

pub async fn list_teacher_subjects(
    req: HttpRequest,
    teacher_id: SafeTeacherIdI64,
) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE
        .list_teacher_subjects(&req, teacher_id.0)
        .await
}

pub async fn list_teacher_students(
    req: HttpRequest,
    teacher_id: SafeTeacherIdI64,
) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE
        .list_teacher_students(&req, teacher_id.0)
        .await
}

// 配置路由
pub fn configure_teacher_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/teachers")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(
                        web::get()
                            .to(list_teachers)
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    )
                    .route(
                        web::post()
                            .to(create_teacher)
                            // 仅管理员可以录入教师
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    ),
            )
            .service(
                web::resource("/{teacher_id}")
                    .route(
                        web::get()
                            .to(get_teacher)
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    )
                    .route(
                        web::put()
                            .to(update_teacher)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    )
                    .route(
                        web::delete()
                            .to(delete_teacher)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    ),
            )
            .service(
                web::scope("/{teacher_id}")
                    .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles()))
                    .route("/subjects", web::get().to(list_teacher_subjects))
                    .route("/students", web::get().to(list_teacher_students)),
            ),
    );
}
