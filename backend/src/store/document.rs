use common::model::farm::Farm;
use common::model::id::DocId;
use common::model::product::Product;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// A record type kept in its own collection, keyed by `DocId`.
pub trait Document: Serialize + DeserializeOwned + Send + 'static {
    /// Name of the collection (and backing table).
    const COLLECTION: &'static str;

    fn id(&self) -> DocId;
}

impl Document for Farm {
    const COLLECTION: &'static str = "farms";

    fn id(&self) -> DocId {
        self.id
    }
}

impl Document for Product {
    const COLLECTION: &'static str = "products";

    fn id(&self) -> DocId {
        self.id
    }
}

/// Collections created when a store is opened.
pub(crate) const COLLECTIONS: [&str; 2] = [Farm::COLLECTION, Product::COLLECTION];

/// Which documents a `find` returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    All,
    /// Top-level string field equal to the value.
    Eq { field: &'static str, value: String },
}

impl Filter {
    pub fn all() -> Self {
        Filter::All
    }

    pub fn eq(field: &'static str, value: impl Into<String>) -> Self {
        Filter::Eq {
            field,
            value: value.into(),
        }
    }
}
