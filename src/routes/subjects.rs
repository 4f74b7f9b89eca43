use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::subjects::requests::{
    CreateSubjectRequest, EnrollStudentRequest, SubjectListParams, UpdateSubjectRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::SubjectService;
use crate::utils::{SafeStudentIdI64, SafeSubjectIdI64};

// 懒加载的全局 SubjectService 实例
static SUBJECT_SERVICE: Lazy<SubjectService> = Lazy::new(SubjectService::new_lazy);

// HTTP处理程序
pub async fn list_subjects(
    req: HttpRequest,
    query: web::Query<SubjectListParams>,
) -> ActixResult<HttpResponse> {
    SUBJECT_SERVICE.list_subjects(&req, query.into_inner()).await
}

pub async fn create_subject(
    req: HttpRequest,
    subject_data: web::Json<CreateSubjectRequest>,
) -> ActixResult<HttpResponse> {
    SUBJECT_SERVICE
        .create_subject(&req, subject_data.into_inner())
        .await
}

pub async fn get_subject(
    req: HttpRequest,
    subject_id: SafeSubjectIdI64,
) -> ActixResult<HttpResponse> {
    SUBJECT_SERVICE.get_subject(&req, subject_id.0).await
}

pub async fn update_subject(
    req: HttpRequest,
    subject_id: SafeSubjectIdI64,
    update_data: web::Json<UpdateSubjectRequest>,
) -> ActixResult<HttpResponse> {
    SUBJECT_SERVICE
        .update_subject(&req, subject_id.0, update_data.into_inner())
        .await
}

pub async fn delete_subject(
    req: HttpRequest,
    subject_id: SafeSubjectIdI64,
) -> ActixResult<HttpResponse> {
    SUBJECT_SERVICE.delete_subject(&req, subject_id.0).await
}

pub async fn list_subject_students(
    req: HttpRequest,
    subject_id: SafeSubjectIdI64,
) -> ActixResult<HttpResponse> {
    SUBJECT_SERVICE
        .list_subject_students(&req, subject_id.0)
        .await
}

pub async fn enroll_student(
    req: HttpRequest,
    subject_id: SafeSubjectIdI64,
    enroll_data: web::Json<EnrollStudentRequest>,
) -> ActixResult<HttpResponse> {
    SUBJECT_SERVICE
        .enroll_student(&req, subject_id.0, enroll_data.student_id)
        .await
}

pub async fn unenroll_student(
    req: HttpRequest,
    subject_id: SafeSubjectIdI64,
    student_id: SafeStudentIdI64,
) -> ActixResult<HttpResponse> {
    SUBJECT_SERVICE
        .unenroll_student(&req, subject_id.0, student_id.0)
        .await
}

// 配置路由
pub fn configure_subject_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/subjects")
            .wrap(middlewares::RequireJWT)
            .service(
                // 所有登录用户都可以浏览科目
                web::resource("")
                    .route(web::get().to(list_subjects))
                    .route(
                        web::post()
                            .to(create_subject)
                            // 仅管理员可以开设科目
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    ),
            )
            .service(
                web::resource("/{subject_id}")
                    .route(web::get().to(get_subject))
                    .route(
                        web::put()
                            .to(update_subject)
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    )
                    .route(
                        web::delete()
                            .to(delete_subject)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    ),
            )
            .service(
                // 选课名单管理：教师与管理员
                web::scope("/{subject_id}/students")
                    .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles()))
                    .route("", web::get().to(list_subject_students))
                    .route("", web::post().to(enroll_student))
                    .route("/{student_id}", web::delete().to(unenroll_student)),
            ),
    );
}
