pub mod login;
pub mod login_request;
pub mod refresh;
pub mod refresh_request;
