//! Nichecraft Core Library
//!
//! Shared functionality for the Nichecraft digital product studio:
//! - Insight matcher mapping a product category to ranked market opportunities
//! - Generation pipeline streaming progress steps and a final product descriptor
//! - Studio configuration (delays, placeholder links) with file and env overrides

pub mod config;
pub mod error;
pub mod generation;
pub mod research;

pub use config::{GenerationConfig, ResearchConfig, StudioConfig};
pub use error::{Error, Result};
pub use generation::{
    GeneratedProduct, GenerationPipeline, ProductRequest, ProductType, ProductTypeInfo,
    ProgressEvent, ProgressStream, PROGRESS_STEPS,
};
pub use research::{
    Competition, InsightMatcher, MarketInsight, MatchOutcome, Platform, Trend,
};
