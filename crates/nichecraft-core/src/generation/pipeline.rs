//! Generation Pipeline - streams progress steps, then the finished product
//!
//! Each request runs as one tokio task that owns the sending half of a
//! bounded channel. The task emits the fixed progress labels one at a time,
//! pausing for the configured step delay after each, then emits exactly one
//! product event and drops the sender, which ends the stream.
//!
//! Dropping the [`ProgressStream`] closes the channel; the task notices on its
//! next send or while sleeping and exits quietly. Streams are never replayed.

use std::pin::Pin;
use std::task::{Context, Poll};

use futures::{Stream, StreamExt};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_stream::wrappers::ReceiverStream;
use tracing::{debug, info};

use crate::config::GenerationConfig;
use crate::error::{Error, Result};

use super::templates::build_product;
use super::types::{GeneratedProduct, ProductRequest, ProgressEvent};

/// Progress labels, in emission order
pub const PROGRESS_STEPS: [&str; 8] = [
    "Analyzing market trends and audience...",
    "Researching content structure...",
    "Generating outline and chapters...",
    "Writing professional content...",
    "Designing layout and formatting...",
    "Creating visual elements...",
    "Finalizing PDF document...",
    "Product ready for download!",
];

const REQUIRED_FIELDS: &str = "Product type and topic are required";

#[derive(Debug, Clone, Default)]
pub struct GenerationPipeline {
    config: GenerationConfig,
}

impl GenerationPipeline {
    pub fn new(config: GenerationConfig) -> Self {
        Self { config }
    }

    /// Validate a request without starting anything
    pub fn validate(request: &ProductRequest) -> Result<()> {
        if request.product_type.is_empty() || request.topic.is_empty() {
            return Err(Error::Validation(REQUIRED_FIELDS.to_string()));
        }
        Ok(())
    }

    /// Validate the request and start generating.
    ///
    /// Must be called from within a Tokio runtime. Validation failures return
    /// before any task is spawned, so no events are ever produced for them.
    pub fn start(&self, request: ProductRequest) -> Result<ProgressStream> {
        Self::validate(&request)?;

        if request.kind().is_none() {
            debug!(
                product_type = %request.product_type,
                "Unrecognized product type, using generic description"
            );
        }

        let (tx, rx) = mpsc::channel(PROGRESS_STEPS.len() + 1);
        spawn_generation(request, self.config.clone(), tx);

        Ok(ProgressStream {
            inner: ReceiverStream::new(rx),
        })
    }
}

fn spawn_generation(
    request: ProductRequest,
    config: GenerationConfig,
    tx: mpsc::Sender<ProgressEvent>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!(
            product_type = %request.product_type,
            topic = %request.topic,
            "Starting product generation"
        );

        for (index, label) in PROGRESS_STEPS.iter().enumerate() {
            if tx
                .send(ProgressEvent::Progress(label.to_string()))
                .await
                .is_err()
            {
                debug!(step = index + 1, "Consumer disconnected, stopping generation");
                return;
            }
            debug!(step = index + 1, label, "Progress sent");

            tokio::select! {
                _ = tokio::time::sleep(config.step_delay) => {}
                _ = tx.closed() => {
                    debug!(step = index + 1, "Consumer disconnected, stopping generation");
                    return;
                }
            }
        }

        let product = build_product(&request, &config.download_url);
        let title = product.title.clone();

        if tx.send(ProgressEvent::Product(product)).await.is_err() {
            debug!("Consumer disconnected before product delivery");
            return;
        }

        info!(title = %title, "Product generated");
    })
}

/// Lazy, finite, non-restartable stream of generation events
#[derive(Debug)]
pub struct ProgressStream {
    inner: ReceiverStream<ProgressEvent>,
}

impl ProgressStream {
    /// Drain the stream, reporting each progress label, and return the product.
    ///
    /// A stream that ends without a product event is a failed generation.
    pub async fn into_product<F>(mut self, mut on_progress: F) -> Result<GeneratedProduct>
    where
        F: FnMut(&str),
    {
        let mut steps = 0;

        while let Some(event) = self.next().await {
            match event {
                ProgressEvent::Progress(label) => {
                    steps += 1;
                    on_progress(&label);
                }
                ProgressEvent::Product(product) => return Ok(product),
            }
        }

        Err(Error::Incomplete(format!(
            "stream ended after {} progress step(s) without a product",
            steps
        )))
    }
}

impl Stream for ProgressStream {
    type Item = ProgressEvent;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        Pin::new(&mut self.inner).poll_next(cx)
    }
}
