//! MongoDB-backed document store adapter.
//!
//! This crate provides:
//! - A lazily-connecting client wrapper over the jobs and bids collections
//! - Typed repositories for job and bid documents
//! - Startup index bootstrap (unique (email, jobId) index on bids)

pub mod bids;
pub mod client;
pub mod error;
pub mod jobs;

pub use bids::BidRepository;
pub use client::StoreClient;
pub use error::{StoreError, StoreResult};
pub use jobs::JobRepository;
