pub mod client;
pub mod media_store;
