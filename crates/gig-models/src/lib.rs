//! Shared data models for the GigDesk backend.
//!
//! This crate provides Serde-serializable types for:
//! - Job postings and their buyer sub-record
//! - Bids and their lifecycle status
//! - Search and sort parameters for job queries

pub mod bid;
pub mod job;
pub mod search;
mod serde_util;

// Re-export common types
pub use bid::Bid;
pub use job::{Buyer, Job};
pub use search::{JobSearch, SortDirection};
