//! Request handlers.

pub mod acks;
pub mod bids;
pub mod health;
pub mod jobs;
pub mod session;

pub use acks::*;
pub use bids::*;
pub use health::*;
pub use jobs::*;
pub use session::*;
