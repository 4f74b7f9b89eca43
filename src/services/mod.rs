pub(crate) mod actor;
pub mod assignments;
pub mod auth;
pub mod gradebook;
pub mod students;
pub mod subjects;
pub mod teachers;
pub mod users;

pub use assignments::AssignmentService;
pub use auth::AuthService;
pub use gradebook::GradebookService;
pub use students::StudentService;
pub use subjects::SubjectService;
pub use teachers::TeacherService;
pub use users::UserService;
