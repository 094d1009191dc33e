pub mod connection;
pub mod fixtures;
pub mod indexes;
pub mod models;

pub use connection::{StoreHandle, UnavailableReason, connect, resolve_store};
