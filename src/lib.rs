pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod middleware;
pub mod router;
pub mod service;
pub mod types;

pub use error::AlertError;
pub use router::{AlertState, alert_router, stub_router};
