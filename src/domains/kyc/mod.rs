// KYC domain module (mock identity verification)
pub mod handlers;
pub mod services;
pub mod models;
pub mod routes;

pub use models::*;
pub use routes::*;
