pub mod dashboard;
pub mod organization;
pub mod project;
pub mod session;
