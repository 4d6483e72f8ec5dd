pub mod alert;
pub mod auth;
pub mod banner;
pub mod stub;
