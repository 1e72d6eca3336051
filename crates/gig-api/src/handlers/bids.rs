//! Bid API handlers.

use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;

use gig_models::Bid;
use gig_store::BidRepository;

use crate::auth::AuthUser;
use crate::error::{ApiError, ApiResult};
use crate::services::BidService;
use crate::state::AppState;

use super::acks::{InsertAck, UpdateAck};

/// Submit a bid. A second bid by the same email on the same job answers 400.
pub async fn add_bid(
    State(state): State<AppState>,
    Json(bid): Json<Bid>,
) -> ApiResult<Json<InsertAck>> {
    let id = BidService::new(&state.store).submit(&bid).await?;
    Ok(Json(InsertAck {
        inserted_id: id.to_hex(),
    }))
}

/// Bids submitted by a freelancer.
pub async fn bids_by_bidder(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> ApiResult<Json<Vec<Bid>>> {
    Ok(Json(
        BidRepository::new(&state.store).list_by_bidder(&email).await?,
    ))
}

/// Bids addressed to a buyer. Guarded: the session identity must match the
/// email in the path, otherwise 401 without touching the store.
pub async fn bid_requests(
    State(state): State<AppState>,
    Path(email): Path<String>,
    user: AuthUser,
) -> ApiResult<Json<Vec<Bid>>> {
    user.authorize_path_email(&email)?;
    Ok(Json(
        BidRepository::new(&state.store).list_by_buyer(&email).await?,
    ))
}

/// Status update request body.
#[derive(Debug, Deserialize)]
pub struct StatusUpdate {
    pub status: String,
}

/// Set a bid's lifecycle status. Unknown ids answer 404; nothing is created.
pub async fn update_bid_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(update): Json<StatusUpdate>,
) -> ApiResult<Json<UpdateAck>> {
    if update.status.trim().is_empty() {
        return Err(ApiError::bad_request("status must not be empty"));
    }

    let outcome = BidRepository::new(&state.store)
        .set_status(&id, &update.status)
        .await?;
    if outcome.matched_count == 0 {
        return Err(ApiError::not_found(format!("bid {id}")));
    }

    Ok(Json(UpdateAck {
        matched_count: outcome.matched_count,
        modified_count: outcome.modified_count,
        upserted_id: None,
    }))
}
