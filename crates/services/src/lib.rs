pub mod board;
pub mod catalog;
pub mod dao;
pub mod display;
pub mod feed;
pub mod ids;
pub mod session;

pub use catalog::{Catalog, DataSource, Sourced};
pub use dao::*;
pub use session::SessionService;
