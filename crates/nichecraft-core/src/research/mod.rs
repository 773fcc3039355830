//! Market Research - category to opportunity matching
//!
//! Research is simulated: a fixed table of keyword buckets, each paired with
//! two hand-authored opportunities, stands in for marketplace scraping.
//!
//! ## Usage
//!
//! ```rust
//! use nichecraft_core::research::InsightMatcher;
//!
//! let insights = InsightMatcher::new().match_category("productivity planner");
//! assert_eq!(insights.len(), 2);
//! ```

pub mod catalog;
pub mod matcher;
pub mod types;

pub use catalog::{Bucket, BUCKETS};
pub use matcher::{generic_insight, InsightMatcher, MatchOutcome};
pub use types::{Competition, InsightSeed, MarketInsight, Platform, Trend};
