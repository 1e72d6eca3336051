//! API routes.

use std::sync::Arc;

use axum::middleware;
use axum::routing::{get, patch, post, put};
use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;

use crate::handlers::bids::{add_bid, bid_requests, bids_by_bidder, update_bid_status};
use crate::handlers::health::{health, ready, root};
use crate::handlers::jobs::{
    add_job, delete_job, get_job, jobs_by_owner, list_jobs, search_jobs, update_job,
};
use crate::handlers::session::{issue_token, logout};
use crate::middleware::{
    cors_layer, rate_limit_middleware, request_id, request_logging, security_headers,
    RateLimiterCache,
};
use crate::state::AppState;

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    let session_routes = Router::new()
        .route("/jwt", post(issue_token))
        .route("/logout", get(logout));

    let job_routes = Router::new()
        .route("/add-job", post(add_job))
        .route("/jobs", get(list_jobs))
        .route("/jobs/:email", get(jobs_by_owner))
        .route("/job/:id", get(get_job).delete(delete_job))
        .route("/update-job/:id", put(update_job))
        .route("/all-jobs", get(search_jobs));

    let bid_routes = Router::new()
        .route("/add-bid", post(add_bid))
        .route("/bids/:email", get(bids_by_bidder))
        .route("/bid-requests/:email", get(bid_requests))
        .route("/bid-update/:id", patch(update_bid_status));

    let rate_limiter = Arc::new(RateLimiterCache::new(state.config.rate_limit_rps));

    let api_routes = Router::new()
        .merge(session_routes)
        .merge(job_routes)
        .merge(bid_routes)
        .layer(middleware::from_fn_with_state(
            rate_limiter,
            rate_limit_middleware,
        ));

    let probe_routes = Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/ready", get(ready));

    Router::new()
        .merge(api_routes)
        .merge(probe_routes)
        .layer(RequestBodyLimitLayer::new(state.config.max_body_size))
        .layer(middleware::from_fn(security_headers))
        .layer(middleware::from_fn(request_id))
        .layer(middleware::from_fn(request_logging))
        .layer(cors_layer(&state.config.cors_origins))
        .with_state(state)
}
