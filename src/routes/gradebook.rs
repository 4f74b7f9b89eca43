use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::gradebook::requests::{EntryListParams, GradeAssignmentRequest};
use crate::models::users::entities::UserRole;
use crate::services::GradebookService;
use crate::utils::SafeEntryIdI64;

// 懒加载的全局 GradebookService 实例
static GRADEBOOK_SERVICE: Lazy<GradebookService> = Lazy::new(GradebookService::new_lazy);

// HTTP处理程序
pub async fn grade_assignment(
    req: HttpRequest,
    grade_data: web::Json<GradeAssignmentRequest>,
) -> ActixResult<HttpResponse> {
    GRADEBOOK_SERVICE
        .grade_assignment(&req, grade_data.into_inner())
        .await
}

pub async fn list_entries(
    req: HttpRequest,
    query: web::Query<EntryListParams>,
) -> ActixResult<HttpResponse> {
    GRADEBOOK_SERVICE.list_entries(&req, query.into_inner()).await
}

pub async fn get_entry(req: HttpRequest, entry_id: SafeEntryIdI64) -> ActixResult<HttpResponse> {
    GRADEBOOK_SERVICE.get_entry(&req, entry_id.0).await
}

pub async fn delete_entry(req: HttpRequest, entry_id: SafeEntryIdI64) -> ActixResult<HttpResponse> {
    GRADEBOOK_SERVICE.delete_entry(&req, entry_id.0).await
}

// 配置路由
pub fn configure_gradebook_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/gradebook")
            .wrap(middlewares::RequireJWT)
            .service(
                // 学生查成绩时，服务层强制只返回本人的记录
                web::resource("/entries")
                    .route(web::get().to(list_entries))
                    .route(
                        web::post()
                            .to(grade_assignment)
                            // 教师评分，管理员同样可以
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    ),
            )
            .service(
                web::resource("/entries/{entry_id}")
                    .route(web::get().to(get_entry))
                    .route(
                        web::delete()
                            .to(delete_entry)
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    ),
            ),
    );
}
