pub mod error;
pub mod identity;
pub mod models;

pub use error::{LookupError, Result};
pub use identity::user_identity::UserIdentity;
pub use identity::user_store::UserStore;
pub use models::user::User;
