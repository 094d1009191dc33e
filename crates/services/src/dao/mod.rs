pub mod base;
pub mod organization;
pub mod project;

pub use base::{BaseDao, DaoError, DaoResult};
pub use organization::OrganizationDao;
pub use project::ProjectDao;
