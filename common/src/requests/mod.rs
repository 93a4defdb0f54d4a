use serde::{Deserialize, Serialize};

/// Fields submitted by the new-farm form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FarmForm {
    pub name: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub email: String,
}

/// Fields submitted by the product forms (new, nested new and edit).
///
/// `category` stays a string here so an unknown value surfaces as a
/// validation error on the record rather than a malformed request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductForm {
    pub name: String,
    pub price: f64,
    pub category: String,
}

/// Query string of `GET /products`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductQuery {
    pub category: Option<String>,
}

impl ProductQuery {
    /// The requested category, if a non-empty one was given.
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.is_empty())
    }
}
