//! Business logic services.

pub mod bids;

pub use bids::BidService;
