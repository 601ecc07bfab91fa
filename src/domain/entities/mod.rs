//! Core domain entities.
//!
//! The service has a single persistent entity, the [`Mapping`] from a
//! [`ShortCode`] to the original URL and its click counter.

pub mod mapping;

pub use mapping::{CODE_LENGTH, Mapping, ShortCode};
