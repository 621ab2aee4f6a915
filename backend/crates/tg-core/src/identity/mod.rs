pub mod user_identity;
pub mod user_store;
