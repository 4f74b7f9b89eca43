//! 数据模型定义
//!
//! 按领域拆分：每个领域包含 entities / requests / responses 三类模型。

pub mod assignments;
pub mod auth;
pub mod common;
pub mod gradebook;
pub mod students;
pub mod subjects;
pub mod teachers;
pub mod users;

pub use common::pagination::{
    PaginatedResponse, PaginationInfo, PaginationQuery, normalize_page_params,
};
pub use common::response::ApiResponse;

/// 业务错误码
///
/// 0 表示成功；1xxx 认证；2xxx 用户与账号；31xx-35xx 各领域实体；
/// 4xxx 通用客户端错误；5xxx 服务端错误。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    // 认证
    AuthFailed = 1001,
    Unauthorized = 1002,
    Forbidden = 1003,

    // 用户与账号
    UserNotFound = 2001,
    UsernameTaken = 2002,
    UsernameInvalid = 2003,
    IncorrectPassword = 2004,
    DuplicateAccount = 2005,
    NoRelation = 2006,
    RoleMismatch = 2007,
    UserCreateFailed = 2008,
    UserDeleteFailed = 2009,
    CannotDeleteCurrentUser = 2010,

    // 学生
    StudentNotFound = 3101,
    StudentCreateFailed = 3102,
    StudentDeleteFailed = 3103,

    // 教师
    TeacherNotFound = 3201,
    TeacherCreateFailed = 3202,
    TeacherDeleteFailed = 3203,

    // 科目与选课
    SubjectNotFound = 3301,
    SubjectCreateFailed = 3302,
    SubjectDeleteFailed = 3303,
    NotEnrolled = 3304,

    // 作业
    AssignmentNotFound = 3401,
    AssignmentCreateFailed = 3402,
    AssignmentDeleteFailed = 3403,
    DeadlineNotInFuture = 3404,

    // 成绩记录
    EntryNotFound = 3501,
    DuplicateEntry = 3502,
    GradeOutOfRange = 3503,
    EntryCreateFailed = 3504,

    // 引用完整性
    EntityInUse = 3601,

    // 通用
    BadRequest = 4001,
    ValidationFailed = 4002,
    InternalServerError = 5001,
}
