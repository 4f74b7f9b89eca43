use std::sync::Arc;

use crate::models::{
    assignments::{
        entities::Assignment,
        requests::{AssignmentListQuery, CreateAssignmentRequest, UpdateAssignmentRequest},
        responses::AssignmentListResponse,
    },
    gradebook::{
        entities::GradebookEntry,
        requests::{EntryListQuery, GradeAssignmentRequest},
        responses::EntryListResponse,
    },
    students::{
        entities::Student,
        requests::{CreateStudentRequest, StudentListQuery, UpdateStudentRequest},
        responses::StudentListResponse,
    },
    subjects::{
        entities::{Enrollment, Subject},
        requests::{CreateSubjectRequest, SubjectListQuery, UpdateSubjectRequest},
        responses::SubjectListResponse,
    },
    teachers::{
        entities::Teacher,
        requests::{CreateTeacherRequest, TeacherListQuery, UpdateTeacherRequest},
        responses::TeacherListResponse,
    },
    users::{
        entities::{User, UserRelation, UserRole},
        requests::{CreateUserRecord, UpdateUserRecord, UserListQuery},
        responses::UserListResponse,
    },
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 学生管理方法
    // 创建学生
    async fn create_student(&self, student: CreateStudentRequest) -> Result<Student>;
    // 通过ID获取学生信息
    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>>;
    // 列出学生
    async fn list_students_with_pagination(
        &self,
        query: StudentListQuery,
    ) -> Result<StudentListResponse>;
    // 更新学生信息
    async fn update_student(&self, id: i64, update: UpdateStudentRequest)
    -> Result<Option<Student>>;
    // 删除学生
    async fn delete_student(&self, id: i64) -> Result<bool>;

    /// 教师管理方法
    // 创建教师
    async fn create_teacher(&self, teacher: CreateTeacherRequest) -> Result<Teacher>;
    // 通过ID获取教师信息
    async fn get_teacher_by_id(&self, id: i64) -> Result<Option<Teacher>>;
    // 列出教师
    async fn list_teachers_with_pagination(
        &self,
        query: TeacherListQuery,
    ) -> Result<TeacherListResponse>;
    // 更新教师信息
    async fn update_teacher(&self, id: i64, update: UpdateTeacherRequest)
    -> Result<Option<Teacher>>;
    // 删除教师
    async fn delete_teacher(&self, id: i64) -> Result<bool>;

    /// 科目管理方法
    // 创建科目
    async fn create_subject(&self, subject: CreateSubjectRequest) -> Result<Subject>;
    // 通过ID获取科目信息
    async fn get_subject_by_id(&self, id: i64) -> Result<Option<Subject>>;
    // 列出科目
    async fn list_subjects_with_pagination(
        &self,
        query: SubjectListQuery,
    ) -> Result<SubjectListResponse>;
    // 更新科目信息
    async fn update_subject(&self, id: i64, update: UpdateSubjectRequest)
    -> Result<Option<Subject>>;
    // 删除科目
    async fn delete_subject(&self, id: i64) -> Result<bool>;
    // 列出教师名下的科目
    async fn list_subjects_by_teacher(&self, teacher_id: i64) -> Result<Vec<Subject>>;

    /// 选课管理方法
    // 学生选课（幂等：已存在时返回现有记录）
    async fn enroll_student(&self, subject_id: i64, student_id: i64) -> Result<Enrollment>;
    // 学生退课
    async fn unenroll_student(&self, subject_id: i64, student_id: i64) -> Result<bool>;
    // 查询选课记录
    async fn get_enrollment(&self, subject_id: i64, student_id: i64)
    -> Result<Option<Enrollment>>;
    // 列出科目下的学生
    async fn list_students_by_subject(&self, subject_id: i64) -> Result<Vec<Student>>;
    // 列出学生选的科目
    async fn list_subjects_by_student(&self, student_id: i64) -> Result<Vec<Subject>>;
    // 列出教师所有科目下的学生（去重，按 ID 排序）
    async fn list_students_by_teacher(&self, teacher_id: i64) -> Result<Vec<Student>>;

    /// 作业管理方法
    // 创建作业
    async fn create_assignment(&self, assignment: CreateAssignmentRequest) -> Result<Assignment>;
    // 通过ID获取作业信息
    async fn get_assignment_by_id(&self, id: i64) -> Result<Option<Assignment>>;
    // 列出作业
    async fn list_assignments_with_pagination(
        &self,
        query: AssignmentListQuery,
    ) -> Result<AssignmentListResponse>;
    // 更新作业信息
    async fn update_assignment(
        &self,
        id: i64,
        update: UpdateAssignmentRequest,
    ) -> Result<Option<Assignment>>;
    // 删除作业
    async fn delete_assignment(&self, id: i64) -> Result<bool>;

    /// 成绩管理方法
    // 写入成绩记录
    async fn create_entry(&self, entry: GradeAssignmentRequest) -> Result<GradebookEntry>;
    // 通过ID获取成绩记录
    async fn get_entry_by_id(&self, id: i64) -> Result<Option<GradebookEntry>>;
    // 查询 (学生, 科目, 作业) 三元组对应的成绩记录
    async fn get_entry_by_triple(
        &self,
        student_id: i64,
        subject_id: i64,
        assignment_id: i64,
    ) -> Result<Option<GradebookEntry>>;
    // 列出成绩记录
    async fn list_entries_with_pagination(
        &self,
        query: EntryListQuery,
    ) -> Result<EntryListResponse>;
    // 删除成绩记录
    async fn delete_entry(&self, id: i64) -> Result<bool>;
    // 统计引用某学生的成绩记录数（删除保护用）
    async fn count_entries_by_student(&self, student_id: i64) -> Result<u64>;
    // 统计引用某科目的成绩记录数（删除保护用）
    async fn count_entries_by_subject(&self, subject_id: i64) -> Result<u64>;
    // 统计引用某作业的成绩记录数（删除保护用）
    async fn count_entries_by_assignment(&self, assignment_id: i64) -> Result<u64>;

    /// 用户管理方法
    // 创建用户（密码已哈希）
    async fn create_user(&self, user: CreateUserRecord) -> Result<User>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 通过用户名获取用户信息
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>>;
    // 列出用户
    async fn list_users_with_pagination(&self, query: UserListQuery) -> Result<UserListResponse>;
    // 更新用户信息
    async fn update_user(&self, id: i64, update: UpdateUserRecord) -> Result<Option<User>>;
    // 删除用户
    async fn delete_user(&self, id: i64) -> Result<bool>;
    // 更新用户最后登录时间
    async fn update_last_login(&self, id: i64) -> Result<bool>;
    // 统计用户总数（启动时判断是否需要初始化管理员）
    async fn count_users(&self) -> Result<u64>;

    /// 用户关联方法
    // 建立用户与学校成员的关联
    async fn create_user_relation(
        &self,
        user_id: i64,
        role: UserRole,
        actor_id: i64,
    ) -> Result<UserRelation>;
    // 通过用户ID查询关联
    async fn get_relation_by_user_id(&self, user_id: i64) -> Result<Option<UserRelation>>;
    // 通过 (角色, 成员ID) 查询关联
    async fn get_relation_by_actor(
        &self,
        role: UserRole,
        actor_id: i64,
    ) -> Result<Option<UserRelation>>;
    // 删除用户的关联记录
    async fn delete_relation_by_user_id(&self, user_id: i64) -> Result<bool>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
