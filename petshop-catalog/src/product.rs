use serde::{Deserialize, Serialize};

/// A single catalog record. Wire names are Spanish to match the public API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: u64,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "precio")]
    pub price: f64,
    #[serde(rename = "categoria")]
    pub category: String,
    pub stock: u32,
}

/// The full set of mutable product fields, used for create and full update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductDraft {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "precio")]
    pub price: f64,
    #[serde(rename = "categoria")]
    pub category: String,
    pub stock: u32,
}

/// A partial update: absent or null fields leave the product untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductPatch {
    #[serde(rename = "nombre")]
    pub name: Option<String>,
    #[serde(rename = "precio")]
    pub price: Option<f64>,
    #[serde(rename = "categoria")]
    pub category: Option<String>,
    pub stock: Option<u32>,
}

impl ProductPatch {
    /// True when no field is present, making the patch a no-op.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.price.is_none() && self.category.is_none() && self.stock.is_none()
    }
}

/// Optional list filters, AND-composed and case-insensitive.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductFilter {
    #[serde(rename = "nombre")]
    pub name: Option<String>,
    #[serde(rename = "categoria")]
    pub category: Option<String>,
}

impl ProductFilter {
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(name) = &self.name {
            if !product.name.to_lowercase().contains(&name.to_lowercase()) {
                return false;
            }
        }
        if let Some(category) = &self.category {
            if product.category.to_lowercase() != category.to_lowercase() {
                return false;
            }
        }
        true
    }
}
