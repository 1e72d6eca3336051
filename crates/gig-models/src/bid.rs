//! Bids placed against job postings.

use bson::oid::ObjectId;
use bson::Document;
use serde::{Deserialize, Serialize};

fn default_status() -> String {
    "pending".to_string()
}

/// A freelancer's offer against a specific job, uniquely identified by
/// (email, jobId).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bid {
    /// Store-generated identifier; absent on submit payloads.
    #[serde(
        rename = "_id",
        skip_serializing_if = "Option::is_none",
        serialize_with = "crate::serde_util::opt_oid_as_hex"
    )]
    pub id: Option<ObjectId>,

    /// Bidder identity.
    pub email: String,

    /// Hex id of the referenced job. A bid references its job, it does not
    /// own it.
    #[serde(rename = "jobId")]
    pub job_id: String,

    /// The job's buyer email, duplicated onto the bid so buyer-scoped listings
    /// can filter without joining the jobs collection.
    #[serde(default)]
    pub buyer: String,

    /// Free-form lifecycle value ("pending", "accepted", "rejected", ...).
    /// Mutated only through the status-update operation.
    #[serde(default = "default_status")]
    pub status: String,

    /// Bid-specific fields supplied by the client (price, comment, ...).
    #[serde(flatten)]
    pub extra: Document,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_defaults_to_pending() {
        let raw = r#"{
            "email": "dev@x.com",
            "jobId": "66f0a2b4c7e1d92f8a3b4c5d",
            "buyer": "a@x.com",
            "price": 250
        }"#;

        let bid: Bid = serde_json::from_str(raw).unwrap();
        assert_eq!(bid.status, "pending");
        assert_eq!(serde_json::to_value(&bid).unwrap()["price"], 250);
    }

    #[test]
    fn stored_id_serializes_as_plain_hex() {
        let bid = Bid {
            id: Some(ObjectId::parse_str("66f0a2b4c7e1d92f8a3b4c5d").unwrap()),
            email: "dev@x.com".to_string(),
            job_id: "66f0a2b4c7e1d92f8a3b4c5e".to_string(),
            buyer: "a@x.com".to_string(),
            status: "pending".to_string(),
            extra: Document::new(),
        };

        let value = serde_json::to_value(&bid).unwrap();
        assert_eq!(value["_id"], "66f0a2b4c7e1d92f8a3b4c5d");
    }

    #[test]
    fn job_reference_keeps_wire_name() {
        let bid = Bid {
            id: None,
            email: "dev@x.com".to_string(),
            job_id: "66f0a2b4c7e1d92f8a3b4c5d".to_string(),
            buyer: "a@x.com".to_string(),
            status: "accepted".to_string(),
            extra: Document::new(),
        };

        let value = serde_json::to_value(&bid).unwrap();
        assert_eq!(value["jobId"], "66f0a2b4c7e1d92f8a3b4c5d");
        assert!(value.get("job_id").is_none());
    }
}
