pub mod database_store;
pub mod stub_data_store;

pub use database_store::DatabaseStore;
pub use stub_data_store::StubDataStore;
