//! Typed repository for bids.

use futures_util::TryStreamExt;
use mongodb::bson::doc;
use mongodb::bson::oid::ObjectId;
use mongodb::results::UpdateResult;
use mongodb::Collection;
use tracing::info;

use gig_models::Bid;

use crate::client::{inserted_object_id, object_id, StoreClient};
use crate::error::{is_duplicate_key, StoreError, StoreResult};

/// Repository for the bids collection.
pub struct BidRepository {
    coll: Collection<Bid>,
}

impl BidRepository {
    pub fn new(store: &StoreClient) -> Self {
        Self { coll: store.bids() }
    }

    /// True if the bidder already has a bid on this job.
    pub async fn exists(&self, email: &str, job_id: &str) -> StoreResult<bool> {
        let found = self
            .coll
            .find_one(doc! {"email": email, "jobId": job_id})
            .await?;
        Ok(found.is_some())
    }

    /// Insert a bid and return its generated id.
    ///
    /// A unique-index violation on (email, jobId) surfaces as
    /// `StoreError::Duplicate`, so concurrent submissions that both pass the
    /// existence check still resolve to exactly one stored bid.
    pub async fn insert(&self, bid: &Bid) -> StoreResult<ObjectId> {
        match self.coll.insert_one(bid).await {
            Ok(outcome) => {
                let id = inserted_object_id(&outcome)?;
                info!(bid_id = %id, email = %bid.email, job_id = %bid.job_id, "created bid");
                Ok(id)
            }
            Err(err) if is_duplicate_key(&err) => Err(StoreError::Duplicate(format!(
                "bid by {} on job {}",
                bid.email, bid.job_id
            ))),
            Err(err) => Err(err.into()),
        }
    }

    /// Bids submitted by a freelancer.
    pub async fn list_by_bidder(&self, email: &str) -> StoreResult<Vec<Bid>> {
        Ok(self
            .coll
            .find(doc! {"email": email})
            .await?
            .try_collect()
            .await?)
    }

    /// Bids addressed to a buyer (bids whose `buyer` field equals the email).
    pub async fn list_by_buyer(&self, email: &str) -> StoreResult<Vec<Bid>> {
        Ok(self
            .coll
            .find(doc! {"buyer": email})
            .await?
            .try_collect()
            .await?)
    }

    /// Set the lifecycle status of a bid. No upsert: a zero matched count in
    /// the returned acknowledgment means the bid does not exist and nothing
    /// was created.
    pub async fn set_status(&self, id: &str, status: &str) -> StoreResult<UpdateResult> {
        let id = object_id(id)?;
        Ok(self
            .coll
            .update_one(doc! {"_id": id}, doc! {"$set": {"status": status}})
            .await?)
    }
}
