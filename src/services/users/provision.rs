use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info, warn};

use super::UserService;
use crate::models::users::entities::UserRole;
use crate::models::users::requests::{CreateUserRecord, ProvisionAccountRequest};
use crate::models::users::responses::{InitialCredentials, ProvisionAccountResponse};
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;
use crate::utils::password::hash_password;
use crate::utils::random_code::{generate_numeric_code, generate_random_password};
use crate::utils::username::username_stem;

/// 每档后缀宽度的尝试次数上限，用完后加宽一位数字
const MAX_ATTEMPTS_PER_WIDTH: usize = 10;
/// 初始密码长度
const INITIAL_PASSWORD_LENGTH: usize = 12;

pub async fn provision_account(
    service: &UserService,
    request: &HttpRequest,
    provision_data: ProvisionAccountRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 只有学校成员（学生/教师）走开户流程
    if provision_data.role == UserRole::Admin {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::RoleMismatch,
            "Accounts can only be provisioned for students and teachers",
        )));
    }

    if provision_data.first_name.trim().is_empty() || provision_data.last_name.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "First name and last name must not be empty",
        )));
    }

    // 确认学校成员存在，角色决定查哪张表
    let actor_exists = match provision_data.role {
        UserRole::Student => storage
            .get_student_by_id(provision_data.actor_id)
            .await
            .map(|s| s.is_some()),
        UserRole::Teacher => storage
            .get_teacher_by_id(provision_data.actor_id)
            .await
            .map(|t| t.is_some()),
        UserRole::Admin => unreachable!(),
    };
    match actor_exists {
        Ok(true) => {}
        Ok(false) => {
            let (code, message) = match provision_data.role {
                UserRole::Student => (ErrorCode::StudentNotFound, "Student not found"),
                _ => (ErrorCode::TeacherNotFound, "Teacher not found"),
            };
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(code, message)));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to get actor information: {e}"),
                )),
            );
        }
    }

    // 同一学校成员只能有一个账号
    match storage
        .get_relation_by_actor(provision_data.role.clone(), provision_data.actor_id)
        .await
    {
        Ok(None) => {}
        Ok(Some(_)) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::DuplicateAccount,
                "An account already exists for this actor",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to check existing account: {e}"),
                )),
            );
        }
    }

    // 生成唯一用户名
    let username = match generate_unique_username(
        storage.as_ref(),
        &provision_data.first_name,
        &provision_data.last_name,
    )
    .await
    {
        Ok(username) => username,
        Err(resp) => return Ok(resp),
    };

    let password = generate_random_password(INITIAL_PASSWORD_LENGTH);
    let password_hash = match hash_password(&password) {
        Ok(hash) => hash,
        Err(e) => {
            error!("Password hashing failed: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Password hashing failed: {e}"),
                )),
            );
        }
    };

    let user = match storage
        .create_user(CreateUserRecord {
            username: username.clone(),
            password_hash,
            role: provision_data.role.clone(),
        })
        .await
    {
        Ok(user) => user,
        Err(e) => {
            error!("User creation failed: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::UserCreateFailed,
                    format!("User creation failed: {e}"),
                )),
            );
        }
    };

    if let Err(e) = storage
        .create_user_relation(user.id, provision_data.role.clone(), provision_data.actor_id)
        .await
    {
        // 关联失败则回收刚创建的用户，避免悬空账号
        error!("Relation creation failed: {}", e);
        if let Err(cleanup_err) = storage.delete_user(user.id).await {
            warn!("Failed to clean up orphaned user {}: {}", user.id, cleanup_err);
        }
        return Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::UserCreateFailed,
                format!("Relation creation failed: {e}"),
            )),
        );
    }

    info!(
        "Account {} provisioned for {} {}",
        user.id, provision_data.role, provision_data.actor_id
    );
    Ok(HttpResponse::Created().json(ApiResponse::success(
        ProvisionAccountResponse {
            user,
            credentials: InitialCredentials { username, password },
        },
        "Account provisioned successfully",
    )))
}

/// 从姓名派生用户名并追加随机数字后缀，冲突时重掷；
/// 两位后缀多次尝试仍冲突时加宽到三位。
async fn generate_unique_username(
    storage: &dyn Storage,
    first_name: &str,
    last_name: &str,
) -> Result<String, HttpResponse> {
    let stem = username_stem(first_name, last_name);
    if stem.is_empty() {
        return Err(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "Name does not contain any usable characters",
        )));
    }

    for suffix_len in [2usize, 3] {
        for _ in 0..MAX_ATTEMPTS_PER_WIDTH {
            let candidate = format!("{}{}", stem, generate_numeric_code(suffix_len));
            match storage.get_user_by_username(&candidate).await {
                Ok(None) => return Ok(candidate),
                Ok(Some(_)) => continue,
                Err(e) => {
                    return Err(HttpResponse::InternalServerError().json(
                        ApiResponse::error_empty(
                            ErrorCode::InternalServerError,
                            format!("Failed to check username availability: {e}"),
                        ),
                    ));
                }
            }
        }
    }

    error!("Username generation exhausted retries for stem {}", stem);
    Err(
        HttpResponse::InternalServerError().json(ApiResponse::error_empty(
            ErrorCode::UserCreateFailed,
            "Could not generate a unique username",
        )),
    )
}
