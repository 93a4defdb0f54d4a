use crate::model::id::DocId;
use crate::model::product::Product;
use crate::model::{ValidationError, require_text};
use crate::requests::FarmForm;
use serde::{Deserialize, Serialize};

/// A seller and the references to the products it has listed.
///
/// `products` holds ids only; resolving them into `Product` records is the
/// store's job. Deleting a farm leaves those products in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Farm {
    pub id: DocId,
    pub name: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub products: Vec<DocId>,
}

impl Farm {
    pub fn from_form(form: &FarmForm) -> Result<Self, ValidationError> {
        require_text("name", &form.name)?;
        Ok(Self {
            id: DocId::generate(),
            name: form.name.trim().to_string(),
            city: form.city.trim().to_string(),
            email: form.email.trim().to_string(),
            products: Vec::new(),
        })
    }

    /// Links `product` to this farm on both sides of the relationship.
    pub fn add_product(&mut self, product: &mut Product) {
        self.products.push(product.id);
        product.farm = Some(self.id);
    }
}
