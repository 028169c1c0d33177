//! 预导入模块，方便使用

pub use super::assignment_categories::{
    ActiveModel as AssignmentCategoryActiveModel, Entity as AssignmentCategories,
    Model as AssignmentCategoryModel,
};
pub use super::assignments::{
    ActiveModel as AssignmentActiveModel, Entity as Assignments, Model as AssignmentModel,
};
pub use super::class_offerings::{
    ActiveModel as ClassOfferingActiveModel, Entity as ClassOfferings,
    Model as ClassOfferingModel,
};
pub use super::courses::{ActiveModel as CourseActiveModel, Entity as Courses, Model as CourseModel};
pub use super::enrollments::{
    ActiveModel as EnrollmentActiveModel, Entity as Enrollments, Model as EnrollmentModel,
};
pub use super::submissions::{
    ActiveModel as SubmissionActiveModel, Entity as Submissions, Model as SubmissionModel,
};
