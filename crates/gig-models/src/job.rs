//! Job postings.

use bson::oid::ObjectId;
use bson::Document;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Buyer sub-record embedded in a job posting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Buyer {
    /// Buyer identity; jobs are looked up by this field.
    pub email: String,

    /// Extra buyer fields supplied by the client (display name, photo, ...).
    #[serde(flatten)]
    pub extra: Document,
}

impl Buyer {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            extra: Document::new(),
        }
    }
}

/// A posted task with a buyer, category, deadline and running bid counter.
///
/// Only the fields the backend reasons about are typed; everything else the
/// creator sends (description, price range, ...) is preserved verbatim in
/// `extra` and written back to the store unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    /// Store-generated identifier; absent on insert payloads.
    #[serde(
        rename = "_id",
        skip_serializing_if = "Option::is_none",
        serialize_with = "crate::serde_util::opt_oid_as_hex"
    )]
    pub id: Option<ObjectId>,

    pub title: String,

    pub category: String,

    /// Serialized as `YYYY-MM-DD`, so string order equals date order.
    pub deadline: NaiveDate,

    pub buyer: Buyer,

    /// Number of accepted bids against this job. Starts at 0 and is only ever
    /// incremented by the bid submission workflow.
    #[serde(default)]
    pub bid_count: u32,

    /// Arbitrary descriptive fields supplied by the creator.
    #[serde(flatten)]
    pub extra: Document,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_payload_preserves_unknown_fields() {
        let raw = r#"{
            "title": "Logo design",
            "category": "design",
            "deadline": "2026-09-01",
            "buyer": {"email": "a@x.com", "name": "Alice"},
            "description": "Need a fresh logo",
            "min_price": 100
        }"#;

        let job: Job = serde_json::from_str(raw).unwrap();
        assert!(job.id.is_none());
        assert_eq!(job.bid_count, 0);
        assert_eq!(job.buyer.email, "a@x.com");
        assert_eq!(job.buyer.extra.get_str("name").unwrap(), "Alice");
        assert_eq!(job.extra.get_str("description").unwrap(), "Need a fresh logo");

        let back = serde_json::to_value(&job).unwrap();
        assert_eq!(back["min_price"], 100);
        assert_eq!(back["deadline"], "2026-09-01");
        assert!(back.get("_id").is_none());
    }
}
