//! Insight Matcher - maps a product category to ranked market opportunities
//!
//! Matching is plain substring search over a lowercased category against the
//! static bucket table. Every matching bucket contributes its two insights in
//! declaration order. When nothing matches, a single generic insight is built
//! from the category itself so callers always get at least one result.

use tracing::debug;

use super::catalog::{Bucket, BUCKETS};
use super::types::{Competition, MarketInsight, Platform, Trend};

/// Result of matching a category, with the buckets that fired
#[derive(Debug, Clone, PartialEq)]
pub struct MatchOutcome {
    pub insights: Vec<MarketInsight>,
    /// Names of matched buckets, in declaration order
    pub matched: Vec<&'static str>,
}

impl MatchOutcome {
    /// True when no bucket matched and the generic insight was synthesized
    pub fn is_fallback(&self) -> bool {
        self.matched.is_empty()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct InsightMatcher {
    buckets: &'static [Bucket],
}

impl Default for InsightMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl InsightMatcher {
    /// Create a matcher over the built-in bucket table
    pub fn new() -> Self {
        Self { buckets: BUCKETS }
    }

    #[cfg(test)]
    fn with_buckets(buckets: &'static [Bucket]) -> Self {
        Self { buckets }
    }

    /// Match a category and return its insights (never empty)
    pub fn match_category(&self, category: &str) -> Vec<MarketInsight> {
        self.analyze(category).insights
    }

    /// Match a category, reporting which buckets contributed
    pub fn analyze(&self, category: &str) -> MatchOutcome {
        let category_lower = category.to_lowercase();

        let mut insights = Vec::new();
        let mut matched = Vec::new();

        for bucket in self.buckets.iter().filter(|b| b.matches(&category_lower)) {
            matched.push(bucket.name);
            insights.extend(bucket.insights.iter().map(|seed| seed.to_insight()));
        }

        if insights.is_empty() {
            insights.push(generic_insight(category));
        }

        debug!(
            category,
            matched = ?matched,
            count = insights.len(),
            "Category matched"
        );

        MatchOutcome { insights, matched }
    }
}

/// Build the catch-all insight for a category that matched no bucket.
///
/// The title and reasoning keep the category as typed; keywords use its
/// lowercase form.
pub fn generic_insight(category: &str) -> MarketInsight {
    let lower = category.to_lowercase();

    MarketInsight {
        title: format!("{} Ultimate Guide & Workbook", category),
        platform: Platform::AmazonKdp,
        search_volume: 35000,
        competition: Competition::Medium,
        price: "$12.99".to_string(),
        trend: Trend::Steady,
        buying_intent: 75,
        reasoning: format!(
            "The \"{}\" niche shows consistent interest with room for fresh content. \
             Combining educational content with practical worksheets increases value. \
             Current market has outdated offerings. Comprehensive guides in emerging \
             niches can quickly gain traction with proper SEO.",
            category
        ),
        keywords: vec![
            lower.clone(),
            format!("{} guide", lower),
            format!("{} workbook", lower),
            format!("learn {}", lower),
            format!("{} tips", lower),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(insights: &[MarketInsight]) -> Vec<&str> {
        insights.iter().map(|i| i.title.as_str()).collect()
    }

    #[test]
    fn test_productivity_planner() {
        let matcher = InsightMatcher::new();
        let insights = matcher.match_category("productivity planner");

        assert_eq!(
            titles(&insights),
            vec![
                "90-Day Goal Setting & Productivity Planner",
                "Budget Planner for Couples - Financial Tracker",
            ]
        );
        assert!(insights.iter().all(|i| !i.keywords.is_empty()));
    }

    #[test]
    fn test_bucket_matched_once() {
        // Both "planner" and "productivity" hit the same bucket
        let outcome = InsightMatcher::new().analyze("Planner for Productivity");
        assert_eq!(outcome.matched, vec!["planner"]);
        assert_eq!(outcome.insights.len(), 2);
    }

    #[test]
    fn test_wedding_templates() {
        let insights = InsightMatcher::new().match_category("wedding templates");
        let titles = titles(&insights);

        assert!(titles.contains(&"Social Media Content Planner Templates"));
        assert!(titles.contains(&"Business Proposal & Invoice Template Bundle"));
    }

    #[test]
    fn test_multiple_buckets_in_declaration_order() {
        // "journal" is declared after "coloring"; input order must not matter
        let outcome = InsightMatcher::new().analyze("journal art");
        assert_eq!(outcome.matched, vec!["coloring", "journal"]);
        assert_eq!(
            titles(&outcome.insights),
            vec![
                "Mindful Mandalas - Adult Coloring Book",
                "Botanical Gardens - Nature Coloring Collection",
                "Gratitude & Manifestation Journal",
                "Self-Discovery Prompts - 365 Day Journal",
            ]
        );
    }

    #[test]
    fn test_workbook_also_matches_book() {
        let outcome = InsightMatcher::new().analyze("workbook");
        assert_eq!(outcome.matched, vec!["ebook", "workbook"]);
        assert_eq!(outcome.insights.len(), 4);
    }

    #[test]
    fn test_case_insensitive() {
        let lower = InsightMatcher::new().match_category("coloring");
        let upper = InsightMatcher::new().match_category("COLORING");
        assert_eq!(lower, upper);
    }

    #[test]
    fn test_fallback_insight() {
        let outcome = InsightMatcher::new().analyze("qwertyzzz");
        assert!(outcome.is_fallback());
        assert_eq!(outcome.insights.len(), 1);

        let insight = &outcome.insights[0];
        assert!(insight.title.contains("qwertyzzz"));
        assert_eq!(
            insight.keywords,
            vec![
                "qwertyzzz",
                "qwertyzzz guide",
                "qwertyzzz workbook",
                "learn qwertyzzz",
                "qwertyzzz tips",
            ]
        );
        assert_eq!(insight.search_volume, 35000);
        assert_eq!(insight.competition, Competition::Medium);
        assert_eq!(insight.price, "$12.99");
        assert_eq!(insight.trend, Trend::Steady);
        assert_eq!(insight.buying_intent, 75);
    }

    #[test]
    fn test_fallback_keeps_literal_case_in_title() {
        let insight = generic_insight("Sourdough Baking");
        assert_eq!(insight.title, "Sourdough Baking Ultimate Guide & Workbook");
        assert!(insight.reasoning.contains("\"Sourdough Baking\""));
        assert_eq!(insight.keywords[0], "sourdough baking");
        assert_eq!(insight.keywords[3], "learn sourdough baking");
    }

    #[test]
    fn test_match_is_deterministic() {
        let matcher = InsightMatcher::new();
        for category in ["business planner", "qwertyzzz", "Adult Coloring", ""] {
            assert_eq!(
                matcher.match_category(category),
                matcher.match_category(category)
            );
        }
    }

    #[test]
    fn test_never_empty() {
        let matcher = InsightMatcher::new();
        for category in ["", " ", "x", "ebook", "🎨"] {
            assert!(!matcher.match_category(category).is_empty());
        }
    }

    #[test]
    fn test_custom_buckets() {
        static EMPTY: &[Bucket] = &[];
        let outcome = InsightMatcher::with_buckets(EMPTY).analyze("planner");
        assert!(outcome.is_fallback());
    }
}
