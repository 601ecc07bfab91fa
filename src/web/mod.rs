//! Server-rendered HTML pages.
//!
//! - [`stats_page`] - Public stats page for a short code

pub mod stats_page;

pub use stats_page::StatsPage;
