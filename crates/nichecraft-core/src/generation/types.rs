//! Core types for product generation

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kinds of digital product the studio can generate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductType {
    Ebook,
    Journal,
    Planner,
    Coloring,
    Workbook,
    Template,
}

impl ProductType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductType::Ebook => "ebook",
            ProductType::Journal => "journal",
            ProductType::Planner => "planner",
            ProductType::Coloring => "coloring",
            ProductType::Workbook => "workbook",
            ProductType::Template => "template",
        }
    }

    /// Display label used in product titles
    pub fn label(&self) -> &'static str {
        match self {
            ProductType::Ebook => "eBook",
            ProductType::Journal => "Journal",
            ProductType::Planner => "Planner",
            ProductType::Coloring => "Coloring Book",
            ProductType::Workbook => "Workbook",
            ProductType::Template => "Template Pack",
        }
    }

    /// Short blurb shown when picking a type
    pub fn blurb(&self) -> &'static str {
        match self {
            ProductType::Ebook => "Full-length digital book",
            ProductType::Journal => "Guided journal with prompts",
            ProductType::Planner => "Productivity planner",
            ProductType::Coloring => "Adult coloring pages",
            ProductType::Workbook => "Interactive workbook",
            ProductType::Template => "Business templates",
        }
    }

    /// All product types, in catalog order
    pub fn all() -> &'static [ProductType] {
        &[
            Self::Ebook,
            Self::Journal,
            Self::Planner,
            Self::Coloring,
            Self::Workbook,
            Self::Template,
        ]
    }

    pub fn info(&self) -> ProductTypeInfo {
        ProductTypeInfo {
            id: self.as_str(),
            label: self.label(),
            description: self.blurb(),
        }
    }
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ProductType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ebook" => Ok(ProductType::Ebook),
            "journal" => Ok(ProductType::Journal),
            "planner" => Ok(ProductType::Planner),
            "coloring" => Ok(ProductType::Coloring),
            "workbook" => Ok(ProductType::Workbook),
            "template" => Ok(ProductType::Template),
            _ => Err(format!("Unknown product type: {}", s)),
        }
    }
}

/// Catalog entry for a product type
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductTypeInfo {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

/// A request to generate a product.
///
/// `product_type` stays a raw string: unknown types are accepted and produce
/// a product with the generic description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRequest {
    pub product_type: String,
    pub topic: String,
}

impl ProductRequest {
    pub fn new(product_type: impl Into<String>, topic: impl Into<String>) -> Self {
        Self {
            product_type: product_type.into(),
            topic: topic.into(),
        }
    }

    /// The recognized product type, if any
    pub fn kind(&self) -> Option<ProductType> {
        self.product_type.parse().ok()
    }
}

/// Final descriptor of a generated product
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedProduct {
    pub title: String,
    /// Type label; absent for unrecognized product types
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_label: Option<String>,
    pub description: String,
    pub download_url: String,
}

/// One event of a generation stream.
///
/// Serializes as `{"progress": "..."}` or `{"product": {...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressEvent {
    Progress(String),
    Product(GeneratedProduct),
}

impl ProgressEvent {
    pub fn is_terminal(&self) -> bool {
        matches!(self, ProgressEvent::Product(_))
    }
}
