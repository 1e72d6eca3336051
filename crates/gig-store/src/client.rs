//! MongoDB client wrapper.

use mongodb::bson::doc;
use mongodb::bson::oid::ObjectId;
use mongodb::options::IndexOptions;
use mongodb::results::InsertOneResult;
use mongodb::{Client, Collection, Database, IndexModel};
use tracing::info;

use gig_models::{Bid, Job};

use crate::error::{StoreError, StoreResult};

const JOBS_COLLECTION: &str = "jobs";
const BIDS_COLLECTION: &str = "bids";

/// Handle to the document store.
///
/// Construction is lazy: the driver connects on first operation, so a store
/// that is unreachable at startup does not prevent the process from serving.
/// The handle is established once at startup and cloned per request.
#[derive(Clone)]
pub struct StoreClient {
    db: Database,
}

impl StoreClient {
    /// Connect using `MONGODB_URI` and `MONGODB_DB` environment variables.
    pub async fn from_env() -> StoreResult<Self> {
        let uri = std::env::var("MONGODB_URI")
            .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
        let db_name = std::env::var("MONGODB_DB").unwrap_or_else(|_| "gigdesk".to_string());
        Self::connect(&uri, &db_name).await
    }

    /// Connect to a specific deployment and database.
    pub async fn connect(uri: &str, db_name: &str) -> StoreResult<Self> {
        let client = Client::with_uri_str(uri).await?;
        Ok(Self {
            db: client.database(db_name),
        })
    }

    pub fn jobs(&self) -> Collection<Job> {
        self.db.collection(JOBS_COLLECTION)
    }

    pub fn bids(&self) -> Collection<Bid> {
        self.db.collection(BIDS_COLLECTION)
    }

    /// Round-trip to the deployment; used by the readiness probe.
    pub async fn ping(&self) -> StoreResult<()> {
        self.db.run_command(doc! {"ping": 1}).await?;
        Ok(())
    }

    /// Create the indexes the write paths rely on.
    ///
    /// The compound unique index on (email, jobId) keeps one-bid-per-job
    /// intact under concurrent submissions; the pre-insert existence check
    /// alone cannot.
    pub async fn ensure_indexes(&self) -> StoreResult<()> {
        let unique_bid = IndexModel::builder()
            .keys(doc! {"email": 1, "jobId": 1})
            .options(IndexOptions::builder().unique(true).build())
            .build();
        self.bids().create_index(unique_bid).await?;
        info!("bid uniqueness index ready");
        Ok(())
    }
}

/// Parse a path-supplied document id.
pub(crate) fn object_id(id: &str) -> StoreResult<ObjectId> {
    ObjectId::parse_str(id).map_err(|_| StoreError::invalid_id(id))
}

/// Extract the generated id from an insert acknowledgment.
pub(crate) fn inserted_object_id(outcome: &InsertOneResult) -> StoreResult<ObjectId> {
    outcome
        .inserted_id
        .as_object_id()
        .ok_or_else(|| StoreError::invalid_id("insert acknowledged with a non-ObjectId key"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_malformed_ids() {
        assert!(matches!(object_id("not-hex"), Err(StoreError::InvalidId(_))));
        assert!(object_id("66f0a2b4c7e1d92f8a3b4c5d").is_ok());
    }
}
