//! Product descriptor templates

use super::types::{GeneratedProduct, ProductRequest, ProductType};

/// Rendered in place of a missing type label. Clients already display this
/// text for unknown types, so it is kept as-is.
pub const UNKNOWN_LABEL: &str = "undefined";

/// Build the final product descriptor for a request
pub fn build_product(request: &ProductRequest, download_url: &str) -> GeneratedProduct {
    let kind = request.kind();
    let label = kind.map(|k| k.label());
    let topic = request.topic.as_str();

    let description = match kind {
        Some(kind) => describe(kind, topic),
        None => format!(
            "A professional {} {} created with AI-powered content generation.",
            topic,
            label.unwrap_or(UNKNOWN_LABEL)
        ),
    };

    GeneratedProduct {
        title: format!(
            "{} - Professional {}",
            capitalize_first(topic),
            label.unwrap_or(UNKNOWN_LABEL)
        ),
        type_label: label.map(str::to_string),
        description,
        download_url: download_url.to_string(),
    }
}

fn describe(kind: ProductType, topic: &str) -> String {
    match kind {
        ProductType::Ebook => format!(
            "A comprehensive {} eBook with 50+ pages of expert content, professional formatting, \
             and actionable insights. Includes table of contents, chapter summaries, and bonus resources.",
            topic
        ),
        ProductType::Journal => format!(
            "A beautifully designed {} journal featuring 100+ guided prompts, reflection pages, \
             and tracking tools. Perfect for daily use with space for personal notes and goal setting.",
            topic
        ),
        ProductType::Planner => format!(
            "A professional {} planner with monthly spreads, weekly layouts, goal-setting pages, \
             and progress trackers. Includes bonus templates and planning guides.",
            topic
        ),
        ProductType::Coloring => format!(
            "An artistic {} coloring book with 40 unique, intricate designs on single-sided pages. \
             Features various complexity levels suitable for all skill levels.",
            topic
        ),
        ProductType::Workbook => format!(
            "An interactive {} workbook with exercises, worksheets, and practical activities. \
             Includes answer keys, progress trackers, and bonus downloadable resources.",
            topic
        ),
        ProductType::Template => format!(
            "A complete {} template pack with 20+ professionally designed, fully customizable \
             templates. Includes instructions, examples, and commercial use license.",
            topic
        ),
    }
}

/// Uppercase the first character, leaving the rest untouched
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
