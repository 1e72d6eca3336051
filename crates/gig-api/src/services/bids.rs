//! Bid submission workflow.

use bson::oid::ObjectId;
use tracing::warn;

use gig_models::Bid;
use gig_store::{BidRepository, JobRepository, StoreClient, StoreError};

use crate::error::{ApiError, ApiResult};

/// Bid submission workflow: duplicate guard, persistence, counter bump.
pub struct BidService {
    bids: BidRepository,
    jobs: JobRepository,
}

impl BidService {
    pub fn new(store: &StoreClient) -> Self {
        Self {
            bids: BidRepository::new(store),
            jobs: JobRepository::new(store),
        }
    }

    /// Submit a bid and return its stored id.
    ///
    /// The existence check is the fast path for duplicates; the unique
    /// (email, jobId) index catches submissions that race past it. After a
    /// successful insert the referenced job's counter is incremented
    /// unconditionally. The two writes are sequential, not transactional: a
    /// counter failure after the insert leaves the bid in place and is only
    /// logged.
    pub async fn submit(&self, bid: &Bid) -> ApiResult<ObjectId> {
        if self.bids.exists(&bid.email, &bid.job_id).await? {
            return Err(ApiError::DuplicateBid);
        }

        let id = match self.bids.insert(bid).await {
            Ok(id) => id,
            Err(StoreError::Duplicate(_)) => return Err(ApiError::DuplicateBid),
            Err(err) => return Err(err.into()),
        };

        if let Err(err) = self.jobs.increment_bid_count(&bid.job_id).await {
            warn!(
                job_id = %bid.job_id,
                bid_id = %id,
                error = %err,
                "bid stored but job counter was not incremented"
            );
        }

        Ok(id)
    }
}
