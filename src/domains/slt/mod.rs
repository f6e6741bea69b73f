// SLT token domain module (native reward token)
pub mod handlers;
pub mod services;
pub mod models;
pub mod routes;

pub use models::*;
pub use routes::*;
