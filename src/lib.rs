// SLT wallet backend: wallet registration, mock balances, transaction log
// with SLT rewards, and a time-based mock KYC simulator.
pub mod domains;
pub mod routes;
pub mod shared;
pub mod api_doc;
