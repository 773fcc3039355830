//! Product Generation
//!
//! Simulated synthesis of a digital product for a (type, topic) pair. Callers
//! receive a stream of progress labels followed by a single product
//! descriptor.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use nichecraft_core::generation::{GenerationPipeline, ProductRequest};
//!
//! let pipeline = GenerationPipeline::default();
//! let stream = pipeline.start(ProductRequest::new("ebook", "Mindfulness"))?;
//! let product = stream.into_product(|step| println!("{step}")).await?;
//! ```

pub mod pipeline;
pub mod templates;
pub mod types;

pub use pipeline::{GenerationPipeline, ProgressStream, PROGRESS_STEPS};
pub use templates::{build_product, capitalize_first};
pub use types::{GeneratedProduct, ProductRequest, ProductType, ProductTypeInfo, ProgressEvent};
