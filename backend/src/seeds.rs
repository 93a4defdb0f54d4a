use crate::store::{Store, StoreError};
use common::model::category::Category;
use common::model::id::DocId;
use common::model::product::Product;

const SEED: [(&str, f64, Category); 6] = [
    ("tomato", 2.0, Category::Vegetable),
    ("cheese", 10.0, Category::Dairy),
    ("milk", 8.0, Category::Dairy),
    ("avocado", 11.0, Category::Vegetable),
    ("strawberry", 2.5, Category::Fruit),
    ("apple", 3.0, Category::Fruit),
];

/// The fixed sample catalog, with fresh ids and no farm links.
pub fn seed_products() -> Vec<Product> {
    SEED.iter()
        .map(|&(name, price, category)| Product {
            id: DocId::generate(),
            name: name.to_string(),
            price,
            category,
            farm: None,
        })
        .collect()
}

/// Inserts the sample catalog in one batch and returns what was stored.
pub async fn seed(store: &Store) -> Result<Vec<Product>, StoreError> {
    store.insert_many(seed_products()).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Filter;

    #[tokio::test]
    async fn inserts_six_products() {
        let store = Store::open_in_memory().unwrap();
        let inserted = seed(&store).await.unwrap();

        assert_eq!(inserted.len(), 6);
        assert_eq!(store.count::<Product>().await.unwrap(), 6);
    }

    #[tokio::test]
    async fn dairy_is_cheese_and_milk() {
        let store = Store::open_in_memory().unwrap();
        seed(&store).await.unwrap();

        let dairy: Vec<Product> = store.find(Filter::eq("category", "dairy")).await.unwrap();
        let names: Vec<_> = dairy.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["cheese", "milk"]);
    }

    #[tokio::test]
    async fn seeding_twice_adds_a_second_copy() {
        let store = Store::open_in_memory().unwrap();
        seed(&store).await.unwrap();
        seed(&store).await.unwrap();

        assert_eq!(store.count::<Product>().await.unwrap(), 12);
    }
}
