// src/lib.rs
//! Client for the UK coronavirus dashboard "new cases by publish date" series.
//!
//! A single GET against a fixed endpoint, bounded by a timeout, decoded into a
//! [`TimeSeries`]. There is no retry and no pagination: one attempt either
//! yields the series or a [`FeedError`].

pub mod client;
pub mod error;
pub mod record;

pub use self::client::{CaseFeed, FeedConfig, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT};
pub use self::error::{FeedError, FeedResult};
pub use self::record::{Record, TimeSeries};
