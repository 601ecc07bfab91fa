//! HTTP request handlers.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod dispatch;
pub mod health;
pub mod shorten;
pub mod stats;

pub use dispatch::dispatch_handler;
pub use health::health_handler;
pub use shorten::shorten_handler;
pub use stats::stats_handler;
