//! Frontend Models
//!
//! Data structures matching the Product API resources.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// JSON scalar accepted where the API may send either text or a number
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Integer(i64),
    Float(f64),
    Flag(bool),
}

impl From<Scalar> for String {
    fn from(scalar: Scalar) -> Self {
        match scalar {
            Scalar::Text(text) => text,
            Scalar::Integer(n) => n.to_string(),
            Scalar::Float(n) => n.to_string(),
            Scalar::Flag(b) => b.to_string(),
        }
    }
}

/// Text field that tolerates numbers and `null`
fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Scalar>::deserialize(deserializer)?
        .map(String::from)
        .unwrap_or_default())
}

/// Server-assigned product identifier, kept as opaque text
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "Scalar", into = "String")]
pub struct ProductId(String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<Scalar> for ProductId {
    fn from(scalar: Scalar) -> Self {
        Self(scalar.into())
    }
}

impl From<ProductId> for String {
    fn from(id: ProductId) -> Self {
        id.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Product record (matches API resource)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub category: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub price: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub quantity: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub description: String,
}

/// Editable form copy of a product, also the create/update request body
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    pub name: String,
    pub category: String,
    pub price: String,
    pub quantity: String,
    pub description: String,
}

impl Draft {
    pub fn value(&self, field: DraftField) -> &str {
        match field {
            DraftField::Name => &self.name,
            DraftField::Category => &self.category,
            DraftField::Price => &self.price,
            DraftField::Quantity => &self.quantity,
            DraftField::Description => &self.description,
        }
    }

    pub fn set(&mut self, field: DraftField, value: String) {
        let slot = match field {
            DraftField::Name => &mut self.name,
            DraftField::Category => &mut self.category,
            DraftField::Price => &mut self.price,
            DraftField::Quantity => &mut self.quantity,
            DraftField::Description => &mut self.description,
        };
        *slot = value;
    }
}

impl From<&Product> for Draft {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            category: product.category.clone(),
            price: product.price.clone(),
            quantity: product.quantity.clone(),
            description: product.description.clone(),
        }
    }
}

/// Form inputs, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DraftField {
    Name,
    Category,
    Price,
    Quantity,
    Description,
}

impl DraftField {
    pub const ALL: [DraftField; 5] = [
        DraftField::Name,
        DraftField::Category,
        DraftField::Price,
        DraftField::Quantity,
        DraftField::Description,
    ];

    pub fn placeholder(&self) -> &'static str {
        match self {
            DraftField::Name => "Product Name",
            DraftField::Category => "Category",
            DraftField::Price => "Price",
            DraftField::Quantity => "Quantity",
            DraftField::Description => "Description",
        }
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self, DraftField::Description)
    }
}
