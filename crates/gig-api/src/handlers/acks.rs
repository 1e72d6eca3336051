//! Write acknowledgments mirrored to the client.
//!
//! Write endpoints answer with the store's own acknowledgment shape rather
//! than re-fetching the document.

use serde::Serialize;

/// Insert acknowledgment.
#[derive(Debug, Serialize)]
pub struct InsertAck {
    #[serde(rename = "insertedId")]
    pub inserted_id: String,
}

/// Update acknowledgment.
#[derive(Debug, Serialize)]
pub struct UpdateAck {
    #[serde(rename = "matchedCount")]
    pub matched_count: u64,
    #[serde(rename = "modifiedCount")]
    pub modified_count: u64,
    #[serde(rename = "upsertedId", skip_serializing_if = "Option::is_none")]
    pub upserted_id: Option<String>,
}

/// Delete acknowledgment.
#[derive(Debug, Serialize)]
pub struct DeleteAck {
    #[serde(rename = "deletedCount")]
    pub deleted_count: u64,
}
