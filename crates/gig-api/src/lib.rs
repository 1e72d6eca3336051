//! Axum HTTP API server.
//!
//! This crate provides:
//! - The marketplace REST surface (jobs, bids, session)
//! - Cookie-based session authentication
//! - Rate limiting and security headers

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod state;

pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use routes::create_router;
pub use services::BidService;
pub use state::AppState;
