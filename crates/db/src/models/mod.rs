pub mod organization;
pub mod project;

pub use organization::*;
pub use project::*;
