//! Core types for market research results

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Marketplace where an opportunity was observed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    #[serde(rename = "Etsy")]
    Etsy,
    #[serde(rename = "Amazon KDP")]
    AmazonKdp,
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Etsy => "Etsy",
            Platform::AmazonKdp => "Amazon KDP",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Etsy" => Ok(Platform::Etsy),
            "Amazon KDP" => Ok(Platform::AmazonKdp),
            _ => Err(format!("Unknown platform: {}", s)),
        }
    }
}

/// How crowded a niche is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Competition {
    Low,
    Medium,
    High,
}

impl Competition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Competition::Low => "Low",
            Competition::Medium => "Medium",
            Competition::High => "High",
        }
    }
}

impl fmt::Display for Competition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Competition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Low" => Ok(Competition::Low),
            "Medium" => Ok(Competition::Medium),
            "High" => Ok(Competition::High),
            _ => Err(format!("Unknown competition level: {}", s)),
        }
    }
}

/// Direction of demand for a niche
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Trend {
    #[serde(rename = "Rising Fast")]
    RisingFast,
    #[serde(rename = "Rising")]
    Rising,
    #[serde(rename = "Steady Growth")]
    SteadyGrowth,
    #[serde(rename = "Steady")]
    Steady,
    #[serde(rename = "Seasonal")]
    Seasonal,
    #[serde(rename = "Declining")]
    Declining,
}

impl Trend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Trend::RisingFast => "Rising Fast",
            Trend::Rising => "Rising",
            Trend::SteadyGrowth => "Steady Growth",
            Trend::Steady => "Steady",
            Trend::Seasonal => "Seasonal",
            Trend::Declining => "Declining",
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Trend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Rising Fast" => Ok(Trend::RisingFast),
            "Rising" => Ok(Trend::Rising),
            "Steady Growth" => Ok(Trend::SteadyGrowth),
            "Steady" => Ok(Trend::Steady),
            "Seasonal" => Ok(Trend::Seasonal),
            "Declining" => Ok(Trend::Declining),
            _ => Err(format!("Unknown trend: {}", s)),
        }
    }
}

/// One discovered market opportunity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketInsight {
    pub title: String,
    pub platform: Platform,
    /// Monthly search volume
    pub search_volume: u32,
    pub competition: Competition,
    /// Display price including currency symbol
    pub price: String,
    pub trend: Trend,
    /// Share of searches with commercial intent, 0-100
    pub buying_intent: u8,
    pub reasoning: String,
    pub keywords: Vec<String>,
}

/// Hand-authored insight data as stored in the static rule table
#[derive(Debug, Clone, Copy)]
pub struct InsightSeed {
    pub title: &'static str,
    pub platform: Platform,
    pub search_volume: u32,
    pub competition: Competition,
    pub price: &'static str,
    pub trend: Trend,
    pub buying_intent: u8,
    pub reasoning: &'static str,
    pub keywords: &'static [&'static str],
}

impl InsightSeed {
    pub fn to_insight(&self) -> MarketInsight {
        MarketInsight {
            title: self.title.to_string(),
            platform: self.platform,
            search_volume: self.search_volume,
            competition: self.competition,
            price: self.price.to_string(),
            trend: self.trend,
            buying_intent: self.buying_intent.min(100),
            reasoning: self.reasoning.to_string(),
            keywords: self.keywords.iter().map(|k| k.to_string()).collect(),
        }
    }
}
