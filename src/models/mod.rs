pub mod coursework;
pub mod enrollments;
pub mod grades;
pub mod offerings;
