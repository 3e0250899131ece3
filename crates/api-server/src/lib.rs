//! HTTP API for the Muscadine Box vault dashboard
//!
//! Serves cached USD prices and operational endpoints over JSON.

pub mod routes;
pub mod server;

pub use routes::{router, AppState};
pub use server::ApiServer;
