use crate::model::category::Category;
use crate::model::id::DocId;
use crate::model::{ValidationError, require_text};
use crate::requests::ProductForm;
use serde::{Deserialize, Serialize};

/// A sellable item.
///
/// `farm` is the back-reference to the owning `Farm`. It is only filled in
/// when the product is created through a farm; standalone products carry
/// `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: DocId,
    pub name: String,
    pub price: f64,
    pub category: Category,
    #[serde(default)]
    pub farm: Option<DocId>,
}

impl Product {
    /// Builds a new, unlinked product from submitted fields.
    pub fn from_form(form: &ProductForm) -> Result<Self, ValidationError> {
        let (name, price, category) = validate(form)?;
        Ok(Self {
            id: DocId::generate(),
            name,
            price,
            category,
            farm: None,
        })
    }

    /// Replaces the editable fields, keeping identity and farm link.
    pub fn apply(&mut self, form: &ProductForm) -> Result<(), ValidationError> {
        let (name, price, category) = validate(form)?;
        self.name = name;
        self.price = price;
        self.category = category;
        Ok(())
    }
}

fn validate(form: &ProductForm) -> Result<(String, f64, Category), ValidationError> {
    require_text("name", &form.name)?;
    if !form.price.is_finite() {
        return Err(ValidationError::new("price", "must be a number"));
    }
    let category = form.category.parse()?;
    Ok((form.name.trim().to_string(), form.price, category))
}
