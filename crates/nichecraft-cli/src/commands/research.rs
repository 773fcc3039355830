//! Market research command

use anyhow::Result;
use nichecraft_core::{InsightMatcher, MarketInsight, MatchOutcome, StudioConfig};

pub async fn cmd_research(config: &StudioConfig, category: &str, json: bool) -> Result<()> {
    if category.is_empty() {
        anyhow::bail!("Category is required");
    }

    if !json {
        println!("🔍 Researching \"{}\"...", category);
    }

    tokio::time::sleep(config.research.delay).await;

    let outcome = InsightMatcher::new().analyze(category);

    if json {
        println!("{}", research_json(&outcome)?);
    } else {
        print!("{}", format_research(&outcome));
    }

    Ok(())
}

/// Same `{"results": [...]}` body the research endpoint returns
pub fn research_json(outcome: &MatchOutcome) -> Result<String> {
    let body = serde_json::json!({ "results": outcome.insights });
    Ok(serde_json::to_string_pretty(&body)?)
}

/// Render a match outcome: matched niches, then the ranked insights
pub fn format_research(outcome: &MatchOutcome) -> String {
    let mut out = if outcome.is_fallback() {
        "   No tracked niche matched; showing a general opportunity\n\n".to_string()
    } else {
        format!("   Matched niches: {}\n\n", outcome.matched.join(", "))
    };

    for (i, insight) in outcome.insights.iter().enumerate() {
        out.push_str(&format_insight(i + 1, insight));
    }
    out
}

/// Render one insight as an indented block
pub fn format_insight(rank: usize, insight: &MarketInsight) -> String {
    format!(
        "{}. {}\n   {} | {} | {}/mo searches | {} competition | {} | intent {}%\n   {}\n   Keywords: {}\n\n",
        rank,
        insight.title,
        insight.platform,
        insight.price,
        insight.search_volume,
        insight.competition,
        insight.trend,
        insight.buying_intent,
        super::truncate(&insight.reasoning, 120),
        insight.keywords.join(", "),
    )
}
