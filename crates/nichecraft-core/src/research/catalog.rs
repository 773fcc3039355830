//! Static keyword buckets backing the insight matcher
//!
//! Order matters: matched buckets contribute their insights in the order
//! they are declared here.

use super::types::{Competition, InsightSeed, Platform, Trend};

/// A hand-authored keyword set mapped to a fixed pair of insights
#[derive(Debug)]
pub struct Bucket {
    pub name: &'static str,
    /// Substrings checked against the lowercased category
    pub keywords: &'static [&'static str],
    pub insights: [InsightSeed; 2],
}

impl Bucket {
    /// Whether any keyword occurs in an already-lowercased category
    pub fn matches(&self, category_lower: &str) -> bool {
        self.keywords.iter().any(|k| category_lower.contains(k))
    }
}

pub static BUCKETS: &[Bucket] = &[
    Bucket {
        name: "planner",
        keywords: &["planner", "productivity"],
        insights: [
            InsightSeed {
                title: "90-Day Goal Setting & Productivity Planner",
                platform: Platform::Etsy,
                search_volume: 45000,
                competition: Competition::Low,
                price: "$12.99",
                trend: Trend::RisingFast,
                buying_intent: 87,
                reasoning: "This niche shows strong growth due to New Year resolutions and Q1 goal-setting. Current competitors have outdated designs. High search volume with only 234 competing listings. Buyers actively searching for \"90 day planner\" with commercial intent keywords. Average conversion rate 8.2%.",
                keywords: &[
                    "90 day planner",
                    "goal planner",
                    "productivity journal",
                    "quarterly planner",
                    "goal tracker",
                ],
            },
            InsightSeed {
                title: "Budget Planner for Couples - Financial Tracker",
                platform: Platform::AmazonKdp,
                search_volume: 38000,
                competition: Competition::Low,
                price: "$15.99",
                trend: Trend::Rising,
                buying_intent: 92,
                reasoning: "Wedding season drives demand. \"Couples budget planner\" has 38K monthly searches with minimal competition. Current top seller has 2,500+ reviews at $15.99. Niche-specific keywords show 94% buyer intent. Perfect for newlyweds and engaged couples market segment.",
                keywords: &[
                    "couples budget",
                    "financial planner couples",
                    "money tracker",
                    "wedding budget",
                    "shared expenses",
                ],
            },
        ],
    },
    Bucket {
        name: "coloring",
        keywords: &["coloring", "art"],
        insights: [
            InsightSeed {
                title: "Mindful Mandalas - Adult Coloring Book",
                platform: Platform::Etsy,
                search_volume: 67000,
                competition: Competition::Medium,
                price: "$8.99",
                trend: Trend::SteadyGrowth,
                buying_intent: 78,
                reasoning: "Adult coloring books maintain consistent demand. Mandala-specific searches show 67K/month volume. Low barrier to entry but requires unique designs. Current bestsellers at $8-12 range with 500+ sales/month. Strong recurring customer base.",
                keywords: &[
                    "mandala coloring",
                    "adult coloring book",
                    "mindfulness coloring",
                    "stress relief",
                    "meditation art",
                ],
            },
            InsightSeed {
                title: "Botanical Gardens - Nature Coloring Collection",
                platform: Platform::AmazonKdp,
                search_volume: 52000,
                competition: Competition::Low,
                price: "$9.99",
                trend: Trend::Rising,
                buying_intent: 81,
                reasoning: "Nature-themed coloring books trending upward. \"Botanical coloring book\" niche underserved with only 187 titles. High-quality illustrations in this segment sell 1,200+ copies monthly. Strong gift-giving potential for holidays.",
                keywords: &[
                    "botanical coloring",
                    "nature coloring book",
                    "flower coloring",
                    "garden art",
                    "plant illustrations",
                ],
            },
        ],
    },
    Bucket {
        name: "journal",
        keywords: &["journal", "diary"],
        insights: [
            InsightSeed {
                title: "Gratitude & Manifestation Journal",
                platform: Platform::Etsy,
                search_volume: 71000,
                competition: Competition::Low,
                price: "$11.99",
                trend: Trend::RisingFast,
                buying_intent: 89,
                reasoning: "Manifestation journaling is a breakout trend with 71K searches monthly. Current competition focuses on basic gratitude journals. Combining gratitude + manifestation captures emerging niche. Top sellers at $11.99 with 3,000+ monthly sales.",
                keywords: &[
                    "manifestation journal",
                    "gratitude journal",
                    "law of attraction",
                    "daily affirmations",
                    "mindset journal",
                ],
            },
            InsightSeed {
                title: "Self-Discovery Prompts - 365 Day Journal",
                platform: Platform::AmazonKdp,
                search_volume: 43000,
                competition: Competition::Low,
                price: "$13.99",
                trend: Trend::Steady,
                buying_intent: 85,
                reasoning: "Self-improvement journals show consistent year-round demand. \"Self discovery journal\" has low competition (312 titles) vs high search volume. Prompt-based journals have higher perceived value, commanding $13.99+ price points with strong margins.",
                keywords: &[
                    "self discovery",
                    "journal prompts",
                    "personal growth journal",
                    "365 days",
                    "daily reflection",
                ],
            },
        ],
    },
    Bucket {
        name: "template",
        keywords: &["template", "business"],
        insights: [
            InsightSeed {
                title: "Social Media Content Planner Templates",
                platform: Platform::Etsy,
                search_volume: 89000,
                competition: Competition::Medium,
                price: "$19.99",
                trend: Trend::RisingFast,
                buying_intent: 94,
                reasoning: "Small business owners and content creators desperately need organization tools. 89K monthly searches with 94% commercial intent. Current templates lack modern design. Canva-compatible templates in this niche sell 5,000+ times monthly at premium pricing.",
                keywords: &[
                    "social media planner",
                    "content calendar",
                    "instagram planner",
                    "post planning",
                    "social media templates",
                ],
            },
            InsightSeed {
                title: "Business Proposal & Invoice Template Bundle",
                platform: Platform::Etsy,
                search_volume: 56000,
                competition: Competition::Low,
                price: "$24.99",
                trend: Trend::Steady,
                buying_intent: 96,
                reasoning: "Freelancers and small businesses require professional documents. Bundle approach increases value perception. Current competition offers single templates. Bundles at $24.99 have 2x conversion rate vs individual templates. B2B buyer intent extremely high.",
                keywords: &[
                    "business proposal template",
                    "invoice template",
                    "contract template",
                    "freelance templates",
                    "business bundle",
                ],
            },
        ],
    },
    Bucket {
        name: "ebook",
        keywords: &["ebook", "book"],
        insights: [
            InsightSeed {
                title: "The Complete Guide to Passive Income Streams",
                platform: Platform::AmazonKdp,
                search_volume: 124000,
                competition: Competition::High,
                price: "$9.99",
                trend: Trend::Rising,
                buying_intent: 91,
                reasoning: "Financial education eBooks have massive demand. \"Passive income\" searches at 124K/month indicate strong interest. While competition is high, niche sub-topics (e.g., \"passive income for beginners 2025\") are underserved. Comprehensive guides at $9.99 see 800+ monthly sales.",
                keywords: &[
                    "passive income",
                    "make money online",
                    "side hustle",
                    "financial freedom",
                    "income streams",
                ],
            },
            InsightSeed {
                title: "Meal Prep Mastery: 30-Minute Family Dinners",
                platform: Platform::AmazonKdp,
                search_volume: 67000,
                competition: Competition::Medium,
                price: "$7.99",
                trend: Trend::SteadyGrowth,
                buying_intent: 88,
                reasoning: "Recipe eBooks for busy families maintain strong demand. Meal prep niche less saturated than general cookbooks. Time-specific promises (\"30-minute\") increase conversion. Current bestsellers at $7.99 with 1,200+ monthly sales. Strong review potential drives organic ranking.",
                keywords: &[
                    "meal prep recipes",
                    "quick dinner recipes",
                    "family meals",
                    "30 minute meals",
                    "easy cooking",
                ],
            },
        ],
    },
    Bucket {
        name: "workbook",
        keywords: &["workbook", "worksheet"],
        insights: [
            InsightSeed {
                title: "Anxiety Relief Workbook - CBT Techniques",
                platform: Platform::Etsy,
                search_volume: 78000,
                competition: Competition::Low,
                price: "$16.99",
                trend: Trend::RisingFast,
                buying_intent: 90,
                reasoning: "Mental health workbooks see explosive growth post-pandemic. CBT-based content has credibility. 78K searches with only 423 competing products. Therapeutic workbooks command premium pricing ($16.99) due to perceived value. High completion rate drives positive reviews.",
                keywords: &[
                    "anxiety workbook",
                    "cbt workbook",
                    "mental health",
                    "anxiety relief",
                    "therapy worksheets",
                ],
            },
            InsightSeed {
                title: "Kids Activity Workbook - STEM Learning Fun",
                platform: Platform::AmazonKdp,
                search_volume: 91000,
                competition: Competition::Medium,
                price: "$11.99",
                trend: Trend::Seasonal,
                buying_intent: 86,
                reasoning: "Educational workbooks for children peak during summer and holidays. STEM focus appeals to parents. 91K monthly searches with moderate competition. Activity books at ages 5-8 range sell best. Homeschool market provides year-round demand beyond seasonal spikes.",
                keywords: &[
                    "kids activity book",
                    "stem workbook",
                    "learning activities",
                    "educational workbook",
                    "homeschool",
                ],
            },
        ],
    },
];
