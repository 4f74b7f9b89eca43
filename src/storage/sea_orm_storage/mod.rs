//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod assignments;
mod enrollments;
mod gradebook_entries;
mod students;
mod subjects;
mod teachers;
mod user_relations;
mod users;

use crate::config::AppConfig;
use crate::errors::{GradebookError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| GradebookError::database_operation(format!("Database migration failed: {e}")))?;

        info!("SeaORM storage initialized, database: {}", db_url);

        Ok(Self { db })
    }

    /// 连接指定 URL 并执行迁移，测试用
    ///
    /// 内存 SQLite 每个连接是独立数据库，连接池固定为单连接。
    #[cfg(test)]
    pub(crate) async fn new_with_url(url: &str) -> Result<Self> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(1).sqlx_logging(false);

        let db = Database::connect(opt)
            .await
            .map_err(|e| GradebookError::database_connection(format!("Failed to connect to database: {e}")))?;

        Migrator::up(&db, None)
            .await
            .map_err(|e| GradebookError::database_operation(format!("Database migration failed: {e}")))?;

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| GradebookError::database_config(format!("Failed to parse SQLite URL: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory")
            .pragma("mmap_size", "536870912")
            .pragma("wal_autocheckpoint", "1000");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| GradebookError::database_connection(format!("Failed to connect to SQLite: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| GradebookError::database_connection(format!("Failed to connect to database: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(GradebookError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
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
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 学生模块
    async fn create_student(&self, student: CreateStudentRequest) -> Result<Student> {
        self.create_student_impl(student).await
    }

    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>> {
        self.get_student_by_id_impl(id).await
    }

    async fn list_students_with_pagination(
        &self,
        query: StudentListQuery,
    ) -> Result<StudentListResponse> {
        self.list_students_with_pagination_impl(query).await
    }

    async fn update_student(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>> {
        self.update_student_impl(id, update).await
    }

    async fn delete_student(&self, id: i64) -> Result<bool> {
        self.delete_student_impl(id).await
    }

    // 教师模块
    async fn create_teacher(&self, teacher: CreateTeacherRequest) -> Result<Teacher> {
        self.create_teacher_impl(teacher).await
    }

    async fn get_teacher_by_id(&self, id: i64) -> Result<Option<Teacher>> {
        self.get_teacher_by_id_impl(id).await
    }

    async fn list_teachers_with_pagination(
        &self,
        query: TeacherListQuery,
    ) -> Result<TeacherListResponse> {
        self.list_teachers_with_pagination_impl(query).await
    }

    async fn update_teacher(
        &self,
        id: i64,
        update: UpdateTeacherRequest,
    ) -> Result<Option<Teacher>> {
        self.update_teacher_impl(id, update).await
    }

    async fn delete_teacher(&self, id: i64) -> Result<bool> {
        self.delete_teacher_impl(id).await
    }

    // 科目模块
    async fn create_subject(&self, subject: CreateSubjectRequest) -> Result<Subject> {
        self.create_subject_impl(subject).await
    }

    async fn get_subject_by_id(&self, id: i64) -> Result<Option<Subject>> {
        self.get_subject_by_id_impl(id).await
    }

    async fn list_subjects_with_pagination(
        &self,
        query: SubjectListQuery,
    ) -> Result<SubjectListResponse> {
        self.list_subjects_with_pagination_impl(query).await
    }

    async fn update_subject(
        &self,
        id: i64,
        update: UpdateSubjectRequest,
    ) -> Result<Option<Subject>> {
        self.update_subject_impl(id, update).await
    }

    async fn delete_subject(&self, id: i64) -> Result<bool> {
        self.delete_subject_impl(id).await
    }

    async fn list_subjects_by_teacher(&self, teacher_id: i64) -> Result<Vec<Subject>> {
        self.list_subjects_by_teacher_impl(teacher_id).await
    }

    // 选课模块
    async fn enroll_student(&self, subject_id: i64, student_id: i64) -> Result<Enrollment> {
        self.enroll_student_impl(subject_id, student_id).await
    }

    async fn unenroll_student(&self, subject_id: i64, student_id: i64) -> Result<bool> {
        self.unenroll_student_impl(subject_id, student_id).await
    }

    async fn get_enrollment(
        &self,
        subject_id: i64,
        student_id: i64,
    ) -> Result<Option<Enrollment>> {
        self.get_enrollment_impl(subject_id, student_id).await
    }

    async fn list_students_by_subject(&self, subject_id: i64) -> Result<Vec<Student>> {
        self.list_students_by_subject_impl(subject_id).await
    }

    async fn list_subjects_by_student(&self, student_id: i64) -> Result<Vec<Subject>> {
        self.list_subjects_by_student_impl(student_id).await
    }

    async fn list_students_by_teacher(&self, teacher_id: i64) -> Result<Vec<Student>> {
        self.list_students_by_teacher_impl(teacher_id).await
    }

    // 作业模块
    async fn create_assignment(&self, assignment: CreateAssignmentRequest) -> Result<Assignment> {
        self.create_assignment_impl(assignment).await
    }

    async fn get_assignment_by_id(&self, id: i64) -> Result<Option<Assignment>> {
        self.get_assignment_by_id_impl(id).await
    }

    async fn list_assignments_with_pagination(
        &self,
        query: AssignmentListQuery,
    ) -> Result<AssignmentListResponse> {
        self.list_assignments_with_pagination_impl(query).await
    }

    async fn update_assignment(
        &self,
        id: i64,
        update: UpdateAssignmentRequest,
    ) -> Result<Option<Assignment>> {
        self.update_assignment_impl(id, update).await
    }

    async fn delete_assignment(&self, id: i64) -> Result<bool> {
        self.delete_assignment_impl(id).await
    }

    // 成绩模块
    async fn create_entry(&self, entry: GradeAssignmentRequest) -> Result<GradebookEntry> {
        self.create_entry_impl(entry).await
    }

    async fn get_entry_by_id(&self, id: i64) -> Result<Option<GradebookEntry>> {
        self.get_entry_by_id_impl(id).await
    }

    async fn get_entry_by_triple(
        &self,
        student_id: i64,
        subject_id: i64,
        assignment_id: i64,
    ) -> Result<Option<GradebookEntry>> {
        self.get_entry_by_triple_impl(student_id, subject_id, assignment_id)
            .await
    }

    async fn list_entries_with_pagination(
        &self,
        query: EntryListQuery,
    ) -> Result<EntryListResponse> {
        self.list_entries_with_pagination_impl(query).await
    }

    async fn delete_entry(&self, id: i64) -> Result<bool> {
        self.delete_entry_impl(id).await
    }

    async fn count_entries_by_student(&self, student_id: i64) -> Result<u64> {
        self.count_entries_by_student_impl(student_id).await
    }

    async fn count_entries_by_subject(&self, subject_id: i64) -> Result<u64> {
        self.count_entries_by_subject_impl(subject_id).await
    }

    async fn count_entries_by_assignment(&self, assignment_id: i64) -> Result<u64> {
        self.count_entries_by_assignment_impl(assignment_id).await
    }

    // 用户模块
    async fn create_user(&self, user: CreateUserRecord) -> Result<User> {
        self.create_user_impl(user).await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        self.get_user_by_username_impl(username).await
    }

    async fn list_users_with_pagination(&self, query: UserListQuery) -> Result<UserListResponse> {
        self.list_users_with_pagination_impl(query).await
    }

    async fn update_user(&self, id: i64, update: UpdateUserRecord) -> Result<Option<User>> {
        self.update_user_impl(id, update).await
    }

    async fn delete_user(&self, id: i64) -> Result<bool> {
        self.delete_user_impl(id).await
    }

    async fn update_last_login(&self, id: i64) -> Result<bool> {
        self.update_last_login_impl(id).await
    }

    async fn count_users(&self) -> Result<u64> {
        self.count_users_impl().await
    }

    // 用户关联模块
    async fn create_user_relation(
        &self,
        user_id: i64,
        role: UserRole,
        actor_id: i64,
    ) -> Result<UserRelation> {
        self.create_user_relation_impl(user_id, role, actor_id)
            .await
    }

    async fn get_relation_by_user_id(&self, user_id: i64) -> Result<Option<UserRelation>> {
        self.get_relation_by_user_id_impl(user_id).await
    }

    async fn get_relation_by_actor(
        &self,
        role: UserRole,
        actor_id: i64,
    ) -> Result<Option<UserRelation>> {
        self.get_relation_by_actor_impl(role, actor_id).await
    }

    async fn delete_relation_by_user_id(&self, user_id: i64) -> Result<bool> {
        self.delete_relation_by_user_id_impl(user_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn storage() -> SeaOrmStorage {
        SeaOrmStorage::new_with_url("sqlite::memory:")
            .await
            .expect("in-memory storage")
    }

    fn student_request(email: &str) -> CreateStudentRequest {
        CreateStudentRequest {
            first_name: "John".into(),
            last_name: "Doe".into(),
            grade_level: 7,
            email: email.into(),
            address: None,
            phone: None,
            birth_date: chrono::DateTime::from_timestamp(1_000_000_000, 0).unwrap(),
        }
    }

    async fn seed_subject(s: &SeaOrmStorage) -> i64 {
        s.create_subject_impl(CreateSubjectRequest {
            name: "Algebra".into(),
            teacher_id: None,
        })
        .await
        .expect("create subject")
        .id
    }

    async fn seed_assignment(s: &SeaOrmStorage, subject_id: i64) -> i64 {
        s.create_assignment_impl(CreateAssignmentRequest {
            subject_id,
            name: "Quadratics".into(),
            kind: crate::models::assignments::entities::AssignmentKind::Homework,
            description: None,
            deadline: None,
        })
        .await
        .expect("create assignment")
        .id
    }

    #[tokio::test]
    async fn test_student_crud_round_trip() {
        let s = storage().await;

        let created = s
            .create_student_impl(student_request("john@example.com"))
            .await
            .expect("create");
        assert!(created.id > 0);

        let fetched = s
            .get_student_by_id_impl(created.id)
            .await
            .expect("get")
            .expect("exists");
        assert_eq!(fetched.email, "john@example.com");

        let updated = s
            .update_student_impl(
                created.id,
                UpdateStudentRequest {
                    first_name: None,
                    last_name: None,
                    grade_level: Some(8),
                    email: None,
                    address: None,
                    phone: None,
                    birth_date: None,
                },
            )
            .await
            .expect("update")
            .expect("exists");
        assert_eq!(updated.grade_level, 8);

        assert!(s.delete_student_impl(created.id).await.expect("delete"));
        assert!(
            s.get_student_by_id_impl(created.id)
                .await
                .expect("get")
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_enrollment_is_idempotent() {
        let s = storage().await;
        let student = s
            .create_student_impl(student_request("a@example.com"))
            .await
            .expect("create student");
        let subject_id = seed_subject(&s).await;

        let first = s
            .enroll_student_impl(subject_id, student.id)
            .await
            .expect("enroll");
        let second = s
            .enroll_student_impl(subject_id, student.id)
            .await
            .expect("enroll again");
        assert_eq!(first.id, second.id);

        let students = s
            .list_students_by_subject_impl(subject_id)
            .await
            .expect("list");
        assert_eq!(students.len(), 1);
    }

    #[tokio::test]
    async fn test_unenroll_absent_is_noop() {
        let s = storage().await;
        let subject_id = seed_subject(&s).await;

        let removed = s.unenroll_student_impl(subject_id, 999).await.expect("unenroll");
        assert!(!removed);
    }

    #[tokio::test]
    async fn test_duplicate_entry_rejected_by_unique_index() {
        let s = storage().await;
        let student = s
            .create_student_impl(student_request("b@example.com"))
            .await
            .expect("create student");
        let subject_id = seed_subject(&s).await;
        let assignment_id = seed_assignment(&s, subject_id).await;

        let req = GradeAssignmentRequest {
            student_id: student.id,
            subject_id,
            assignment_id,
            grade: 4,
        };

        s.create_entry_impl(req.clone()).await.expect("first entry");
        assert!(s.create_entry_impl(req).await.is_err());
    }

    #[tokio::test]
    async fn test_entry_reference_counts() {
        let s = storage().await;
        let student = s
            .create_student_impl(student_request("c@example.com"))
            .await
            .expect("create student");
        let subject_id = seed_subject(&s).await;
        let assignment_id = seed_assignment(&s, subject_id).await;

        s.create_entry_impl(GradeAssignmentRequest {
            student_id: student.id,
            subject_id,
            assignment_id,
            grade: 5,
        })
        .await
        .expect("entry");

        assert_eq!(
            s.count_entries_by_student_impl(student.id).await.unwrap(),
            1
        );
        assert_eq!(
            s.count_entries_by_subject_impl(subject_id).await.unwrap(),
            1
        );
        assert_eq!(
            s.count_entries_by_assignment_impl(assignment_id)
                .await
                .unwrap(),
            1
        );
        assert_eq!(s.count_entries_by_student_impl(999).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_duplicate_username_rejected() {
        let s = storage().await;

        s.create_user_impl(CreateUserRecord {
            username: "johndoe42".into(),
            password_hash: "hash".into(),
            role: UserRole::Student,
        })
        .await
        .expect("first user");

        assert!(
            s.create_user_impl(CreateUserRecord {
                username: "johndoe42".into(),
                password_hash: "hash".into(),
                role: UserRole::Student,
            })
            .await
            .is_err()
        );
    }

    #[tokio::test]
    async fn test_one_relation_per_actor() {
        let s = storage().await;

        let user_a = s
            .create_user_impl(CreateUserRecord {
                username: "user-a".into(),
                password_hash: "hash".into(),
                role: UserRole::Student,
            })
            .await
            .expect("user a");
        let user_b = s
            .create_user_impl(CreateUserRecord {
                username: "user-b".into(),
                password_hash: "hash".into(),
                role: UserRole::Student,
            })
            .await
            .expect("user b");

        s.create_user_relation_impl(user_a.id, UserRole::Student, 7)
            .await
            .expect("first relation");

        // 同一个 (role, actor_id) 不允许第二条关联
        assert!(
            s.create_user_relation_impl(user_b.id, UserRole::Student, 7)
                .await
                .is_err()
        );

        // 不同角色的同一 actor_id 互不冲突
        s.create_user_relation_impl(user_b.id, UserRole::Teacher, 7)
            .await
            .expect("teacher relation");
    }

    #[tokio::test]
    async fn test_students_of_teacher_deduplicated() {
        let s = storage().await;
        let teacher = s
            .create_teacher_impl(CreateTeacherRequest {
                first_name: "Mary".into(),
                last_name: "Major".into(),
                email: "mary@example.com".into(),
                address: None,
                phone: None,
                birth_date: chrono::DateTime::from_timestamp(500_000_000, 0).unwrap(),
            })
            .await
            .expect("teacher");

        let math = s
            .create_subject_impl(CreateSubjectRequest {
                name: "Math".into(),
                teacher_id: Some(teacher.id),
            })
            .await
            .expect("math");
        let physics = s
            .create_subject_impl(CreateSubjectRequest {
                name: "Physics".into(),
                teacher_id: Some(teacher.id),
            })
            .await
            .expect("physics");

        let student = s
            .create_student_impl(student_request("d@example.com"))
            .await
            .expect("student");

        s.enroll_student_impl(math.id, student.id).await.expect("enroll math");
        s.enroll_student_impl(physics.id, student.id)
            .await
            .expect("enroll physics");

        let students = s
            .list_students_by_teacher_impl(teacher.id)
            .await
            .expect("list");
        assert_eq!(students.len(), 1);
        assert_eq!(students[0].id, student.id);
    }
}
