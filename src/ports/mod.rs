pub mod data_store;
pub mod notification_service;

pub use data_store::*;
pub use notification_service::*;
