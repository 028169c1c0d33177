pub mod coursework;
pub mod enrollments;
pub mod grades;
pub mod offerings;

pub use coursework::CourseworkService;
pub use enrollments::EnrollmentService;
pub use grades::GradeService;
pub use offerings::OfferingService;
