//! Job API handlers.

use axum::extract::{Path, Query, State};
use axum::Json;
use bson::Document;
use serde::Deserialize;

use gig_models::{Job, JobSearch, SortDirection};
use gig_store::JobRepository;

use crate::error::ApiResult;
use crate::state::AppState;

use super::acks::{DeleteAck, InsertAck, UpdateAck};

/// Query parameters for the all-jobs search.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub filter: Option<String>,
    pub search: Option<String>,
    pub sort: Option<String>,
}

impl From<SearchParams> for JobSearch {
    fn from(params: SearchParams) -> Self {
        Self {
            filter: params.filter,
            search: params.search,
            sort: params.sort.as_deref().and_then(SortDirection::from_param),
        }
    }
}

/// Save a new job posting.
pub async fn add_job(
    State(state): State<AppState>,
    Json(job): Json<Job>,
) -> ApiResult<Json<InsertAck>> {
    let id = JobRepository::new(&state.store).insert(&job).await?;
    Ok(Json(InsertAck {
        inserted_id: id.to_hex(),
    }))
}

/// List every job posting.
pub async fn list_jobs(State(state): State<AppState>) -> ApiResult<Json<Vec<Job>>> {
    Ok(Json(JobRepository::new(&state.store).list_all().await?))
}

/// Jobs posted by a specific buyer.
pub async fn jobs_by_owner(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> ApiResult<Json<Vec<Job>>> {
    Ok(Json(
        JobRepository::new(&state.store).list_by_owner(&email).await?,
    ))
}

/// Fetch one job. A missing id answers JSON `null`, not 404.
pub async fn get_job(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Option<Job>>> {
    Ok(Json(JobRepository::new(&state.store).get(&id).await?))
}

/// Upsert the supplied fields onto a job: unknown ids are created on write.
pub async fn update_job(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(fields): Json<Document>,
) -> ApiResult<Json<UpdateAck>> {
    let outcome = JobRepository::new(&state.store).upsert(&id, fields).await?;
    Ok(Json(UpdateAck {
        matched_count: outcome.matched_count,
        modified_count: outcome.modified_count,
        upserted_id: outcome
            .upserted_id
            .and_then(|b| b.as_object_id())
            .map(|id| id.to_hex()),
    }))
}

/// Delete a job. Idempotent: a repeated call acknowledges zero deletions.
pub async fn delete_job(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteAck>> {
    let outcome = JobRepository::new(&state.store).delete(&id).await?;
    Ok(Json(DeleteAck {
        deleted_count: outcome.deleted_count,
    }))
}

/// Search with optional category filter, title text and deadline sort.
pub async fn search_jobs(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> ApiResult<Json<Vec<Job>>> {
    let query = JobSearch::from(params);
    Ok(Json(JobRepository::new(&state.store).search(&query).await?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_params_map_to_query() {
        let params = SearchParams {
            filter: Some("design".to_string()),
            search: Some("logo".to_string()),
            sort: Some("desc".to_string()),
        };
        let query = JobSearch::from(params);
        assert_eq!(query.filter.as_deref(), Some("design"));
        assert_eq!(query.search.as_deref(), Some("logo"));
        assert_eq!(query.sort, Some(SortDirection::Descending));
    }

    #[test]
    fn unknown_sort_means_store_native_order() {
        let params = SearchParams {
            filter: None,
            search: None,
            sort: Some("newest".to_string()),
        };
        assert_eq!(JobSearch::from(params).sort, None);
    }
}
