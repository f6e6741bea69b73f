// Health domain module
pub mod health_handler;
pub mod routes;

pub use health_handler::HealthResponse;
pub use routes::*;
