use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use common::types::Metadata;

/// Locale-resolved translation block attached to catalog documents; the
/// backend returns the active locale's content in `data`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Translations<T> {
    #[serde(rename = "_id", default)]
    pub id: String,
    pub data: T,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductText {
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub overview: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryText {
    pub name: String,
    pub slug: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    #[serde(rename = "_id")]
    pub id: String,
    pub image: String,
    pub translations: Translations<CategoryText>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub type SubCategory = Category;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GalleryImage {
    #[serde(rename = "_id")]
    pub id: String,
    pub image: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ratings {
    pub count: u32,
    pub average: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: String,
    pub category: Category,
    pub sub_category: SubCategory,
    pub cover: String,
    #[serde(default)]
    pub gallery: Option<Vec<GalleryImage>>,
    pub price: f64,
    pub stock: i64,
    pub sales: i64,
    pub translations: Translations<ProductText>,
    pub ratings: Ratings,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One catalog page with its pagination metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductsPage {
    pub products: Vec<Product>,
    pub pagination: Metadata,
}
