pub mod assignments;
pub mod auth;
pub mod gradebook;
pub mod students;
pub mod subjects;
pub mod teachers;
pub mod users;

pub use assignments::configure_assignment_routes;
pub use auth::configure_auth_routes;
pub use gradebook::configure_gradebook_routes;
pub use students::configure_student_routes;
pub use subjects::configure_subject_routes;
pub use teachers::configure_teacher_routes;
pub use users::configure_user_routes;
