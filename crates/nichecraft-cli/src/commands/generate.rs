//! Product generation command

use std::io::Write;

use anyhow::{Context, Result};
use futures::{Stream, StreamExt};
use nichecraft_core::{
    GeneratedProduct, GenerationPipeline, ProductRequest, ProgressEvent, StudioConfig,
    PROGRESS_STEPS,
};

pub async fn cmd_generate(
    config: &StudioConfig,
    product_type: &str,
    topic: &str,
    json: bool,
) -> Result<()> {
    let pipeline = GenerationPipeline::new(config.generation.clone());
    let request = ProductRequest::new(product_type, topic);
    GenerationPipeline::validate(&request)?;

    if request.kind().is_none() && !json {
        println!(
            "⚠️  Unknown product type '{}', using a generic description",
            product_type
        );
    }

    let stream = pipeline.start(request)?;

    if json {
        return write_json_events(stream, &mut std::io::stdout()).await;
    }

    println!("✨ Generating {} about \"{}\"...", product_type, topic);

    let total = PROGRESS_STEPS.len();
    let mut step = 0;
    let product = stream
        .into_product(|label| {
            step += 1;
            println!("   [{}/{}] {}", step, total, label);
        })
        .await
        .context("Generation failed")?;

    println!();
    print!("{}", format_product(&product));

    Ok(())
}

/// Write one JSON object per line, same payloads as the SSE endpoint.
///
/// Fails if the stream ends before the product event.
pub async fn write_json_events<S, W>(mut stream: S, out: &mut W) -> Result<()>
where
    S: Stream<Item = ProgressEvent> + Unpin,
    W: Write,
{
    let mut finished = false;
    while let Some(event) = stream.next().await {
        finished = event.is_terminal();
        writeln!(out, "{}", serde_json::to_string(&event)?)?;
    }
    if !finished {
        anyhow::bail!("Generation ended without a product");
    }
    Ok(())
}

/// Render a finished product for the terminal
pub fn format_product(product: &GeneratedProduct) -> String {
    let mut out = format!("✅ {}\n", product.title);
    if let Some(label) = &product.type_label {
        out.push_str(&format!("   Type: {}\n", label));
    }
    out.push_str(&format!("   {}\n", product.description));
    out.push_str(&format!("   Download: {}\n", product.download_url));
    out
}
