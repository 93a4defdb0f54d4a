//! # Document Store
//!
//! Farms and products are kept as JSON documents in a local SQLite file, one
//! table per collection:
//!
//! ```sql
//! CREATE TABLE farms (id TEXT PRIMARY KEY, body TEXT NOT NULL)
//! ```
//!
//! `body` is the serialized record. Field filters go through SQLite's JSON
//! functions (`json_extract`), so a collection needs no column per field and
//! a record keeps its shape (including the farm's list of product ids) as is.
//!
//! The `Store` handle is opened once at startup (see `state.rs`) and handed to the route
//! services as application data. All SQLite work runs on tokio's blocking
//! pool behind a single connection lock. No operation spans two collections:
//! callers that touch farms and products issue one call per collection.

mod document;
mod error;

pub use document::{Document, Filter};
pub use error::StoreError;

use common::model::ValidationError;
use common::model::id::DocId;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct Store {
    conn: Arc<Mutex<Connection>>,
}

impl Store {
    /// Opens (or creates) the database file at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        Self::from_connection(Connection::open(path)?)
    }

    /// A private, throwaway database. Used by tests.
    pub fn open_in_memory() -> Result<Self, StoreError> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self, StoreError> {
        for collection in document::COLLECTIONS {
            conn.execute(
                &format!(
                    "CREATE TABLE IF NOT EXISTS {collection} (id TEXT PRIMARY KEY, body TEXT NOT NULL)"
                ),
                [],
            )?;
        }
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    async fn with_conn<R, F>(&self, f: F) -> Result<R, StoreError>
    where
        F: FnOnce(&mut Connection) -> Result<R, StoreError> + Send + 'static,
        R: Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        tokio::task::spawn_blocking(move || {
            let mut conn = conn.lock().map_err(|_| StoreError::Poisoned)?;
            f(&mut *conn)
        })
        .await?
    }

    /// All documents matching `filter`, in insertion order.
    pub async fn find<T: Document>(&self, filter: Filter) -> Result<Vec<T>, StoreError> {
        self.with_conn(move |conn| {
            let bodies: Vec<String> = match filter {
                Filter::All => {
                    let mut stmt = conn.prepare(&format!(
                        "SELECT body FROM {} ORDER BY rowid",
                        T::COLLECTION
                    ))?;
                    let rows = stmt.query_map([], |row| row.get(0))?;
                    rows.collect::<Result<_, _>>()?
                }
                Filter::Eq { field, value } => {
                    let mut stmt = conn.prepare(&format!(
                        "SELECT body FROM {} WHERE json_extract(body, ?1) = ?2 ORDER BY rowid",
                        T::COLLECTION
                    ))?;
                    let rows = stmt.query_map(params![format!("$.{field}"), value], |row| {
                        row.get(0)
                    })?;
                    rows.collect::<Result<_, _>>()?
                }
            };
            bodies.iter().map(|body| decode::<T>(body)).collect()
        })
        .await
    }

    pub async fn find_by_id<T: Document>(&self, id: DocId) -> Result<Option<T>, StoreError> {
        self.with_conn(move |conn| {
            select_body::<T>(conn, id)?
                .as_deref()
                .map(decode::<T>)
                .transpose()
        })
        .await
    }

    /// Resolves a list of references.
    ///
    /// The result follows the order of `ids`; ids with no matching document
    /// are skipped.
    pub async fn find_by_ids<T: Document>(&self, ids: Vec<DocId>) -> Result<Vec<T>, StoreError> {
        self.with_conn(move |conn| {
            let mut found = Vec::with_capacity(ids.len());
            for id in ids {
                if let Some(body) = select_body::<T>(conn, id)? {
                    found.push(decode(&body)?);
                }
            }
            Ok(found)
        })
        .await
    }

    /// Inserts the document, or replaces the stored one with the same id.
    pub async fn save<T: Document>(&self, doc: T) -> Result<T, StoreError> {
        self.with_conn(move |conn| {
            conn.execute(
                &format!(
                    "INSERT INTO {} (id, body) VALUES (?1, ?2) \
                     ON CONFLICT(id) DO UPDATE SET body = excluded.body",
                    T::COLLECTION
                ),
                params![doc.id().to_string(), serde_json::to_string(&doc)?],
            )?;
            Ok(doc)
        })
        .await
    }

    /// Inserts every document in one batch. Nothing is written if any insert
    /// fails.
    pub async fn insert_many<T: Document>(&self, docs: Vec<T>) -> Result<Vec<T>, StoreError> {
        self.with_conn(move |conn| {
            let tx = conn.transaction()?;
            {
                let mut stmt = tx.prepare(&format!(
                    "INSERT INTO {} (id, body) VALUES (?1, ?2)",
                    T::COLLECTION
                ))?;
                for doc in &docs {
                    stmt.execute(params![doc.id().to_string(), serde_json::to_string(doc)?])?;
                }
            }
            tx.commit()?;
            Ok(docs)
        })
        .await
    }

    /// Loads the document, applies `update` and writes it back.
    ///
    /// `update` is where validation happens; if it fails nothing is written.
    /// Returns the updated document, or `None` when no document has `id`.
    pub async fn find_by_id_and_update<T, F>(
        &self,
        id: DocId,
        update: F,
    ) -> Result<Option<T>, StoreError>
    where
        T: Document,
        F: FnOnce(&mut T) -> Result<(), ValidationError> + Send + 'static,
    {
        self.with_conn(move |conn| {
            let tx = conn.transaction()?;
            let Some(body) = select_body::<T>(&tx, id)? else {
                return Ok(None);
            };
            let mut doc: T = decode(&body)?;
            update(&mut doc)?;
            tx.execute(
                &format!("UPDATE {} SET body = ?1 WHERE id = ?2", T::COLLECTION),
                params![serde_json::to_string(&doc)?, id.to_string()],
            )?;
            tx.commit()?;
            Ok(Some(doc))
        })
        .await
    }

    /// Removes the document and returns it, if it existed.
    pub async fn find_by_id_and_delete<T: Document>(
        &self,
        id: DocId,
    ) -> Result<Option<T>, StoreError> {
        self.with_conn(move |conn| {
            let body: Option<String> = conn
                .query_row(
                    &format!("DELETE FROM {} WHERE id = ?1 RETURNING body", T::COLLECTION),
                    params![id.to_string()],
                    |row| row.get(0),
                )
                .optional()?;
            body.as_deref().map(decode::<T>).transpose()
        })
        .await
    }

    pub async fn count<T: Document>(&self) -> Result<u64, StoreError> {
        self.with_conn(|conn| {
            let count: i64 = conn.query_row(
                &format!("SELECT COUNT(*) FROM {}", T::COLLECTION),
                [],
                |row| row.get(0),
            )?;
            Ok(count as u64)
        })
        .await
    }
}

fn select_body<T: Document>(conn: &Connection, id: DocId) -> Result<Option<String>, StoreError> {
    let body = conn
        .query_row(
            &format!("SELECT body FROM {} WHERE id = ?1", T::COLLECTION),
            params![id.to_string()],
            |row| row.get(0),
        )
        .optional()?;
    Ok(body)
}

fn decode<T: Document>(body: &str) -> Result<T, StoreError> {
    Ok(serde_json::from_str(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::model::category::Category;
    use common::model::farm::Farm;
    use common::model::product::Product;

    fn product(name: &str, price: f64, category: Category) -> Product {
        Product {
            id: DocId::generate(),
            name: name.to_string(),
            price,
            category,
            farm: None,
        }
    }

    fn farm(name: &str) -> Farm {
        Farm {
            id: DocId::generate(),
            name: name.to_string(),
            city: "Salem".to_string(),
            email: "farm@example.test".to_string(),
            products: Vec::new(),
        }
    }

    #[tokio::test]
    async fn saved_documents_are_found_by_id() {
        let store = Store::open_in_memory().unwrap();
        let tomato = store.save(product("tomato", 2.0, Category::Vegetable)).await.unwrap();

        let found: Option<Product> = store.find_by_id(tomato.id).await.unwrap();
        assert_eq!(found, Some(tomato));
    }

    #[tokio::test]
    async fn missing_ids_resolve_to_none() {
        let store = Store::open_in_memory().unwrap();
        let found: Option<Farm> = store.find_by_id(DocId::generate()).await.unwrap();
        assert_eq!(found, None);
    }

    #[tokio::test]
    async fn save_replaces_an_existing_document() {
        let store = Store::open_in_memory().unwrap();
        let mut farm = store.save(farm("Old Name")).await.unwrap();
        farm.name = "New Name".to_string();
        store.save(farm.clone()).await.unwrap();

        let all: Vec<Farm> = store.find(Filter::all()).await.unwrap();
        assert_eq!(all, vec![farm]);
    }

    #[tokio::test]
    async fn find_filters_on_a_field_and_keeps_insertion_order() {
        let store = Store::open_in_memory().unwrap();
        store
            .insert_many(vec![
                product("cheese", 10.0, Category::Dairy),
                product("apple", 3.0, Category::Fruit),
                product("milk", 8.0, Category::Dairy),
            ])
            .await
            .unwrap();

        let dairy: Vec<Product> = store.find(Filter::eq("category", "dairy")).await.unwrap();
        let names: Vec<_> = dairy.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["cheese", "milk"]);

        let none: Vec<Product> = store.find(Filter::eq("category", "meat")).await.unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn insert_many_writes_nothing_when_one_insert_fails() {
        let store = Store::open_in_memory().unwrap();
        let apple = product("apple", 3.0, Category::Fruit);
        let result = store.insert_many(vec![apple.clone(), apple]).await;

        assert!(matches!(result, Err(StoreError::Sqlite(_))));
        assert_eq!(store.count::<Product>().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn find_by_ids_keeps_reference_order_and_skips_dangling() {
        let store = Store::open_in_memory().unwrap();
        let a = store.save(product("a", 1.0, Category::Fruit)).await.unwrap();
        let b = store.save(product("b", 1.0, Category::Fruit)).await.unwrap();

        let resolved: Vec<Product> = store
            .find_by_ids(vec![b.id, DocId::generate(), a.id])
            .await
            .unwrap();
        assert_eq!(resolved, vec![b, a]);
    }

    #[tokio::test]
    async fn update_applies_the_closure_and_persists() {
        let store = Store::open_in_memory().unwrap();
        let milk = store.save(product("milk", 8.0, Category::Dairy)).await.unwrap();

        let updated = store
            .find_by_id_and_update(milk.id, |p: &mut Product| {
                p.price = 9.0;
                Ok(())
            })
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.price, 9.0);

        let stored: Product = store.find_by_id(milk.id).await.unwrap().unwrap();
        assert_eq!(stored.price, 9.0);
    }

    #[tokio::test]
    async fn failed_validation_leaves_the_document_untouched() {
        let store = Store::open_in_memory().unwrap();
        let milk = store.save(product("milk", 8.0, Category::Dairy)).await.unwrap();

        let result = store
            .find_by_id_and_update(milk.id, |p: &mut Product| {
                p.price = 0.0;
                Err(ValidationError::new("category", "bad"))
            })
            .await;
        assert!(matches!(result, Err(StoreError::Validation(_))));

        let stored: Product = store.find_by_id(milk.id).await.unwrap().unwrap();
        assert_eq!(stored, milk);
    }

    #[tokio::test]
    async fn update_of_a_missing_document_is_none() {
        let store = Store::open_in_memory().unwrap();
        let result = store
            .find_by_id_and_update(DocId::generate(), |_: &mut Product| Ok(()))
            .await
            .unwrap();
        assert_eq!(result, None);
    }

    #[tokio::test]
    async fn delete_returns_the_removed_document_once() {
        let store = Store::open_in_memory().unwrap();
        let apple = store.save(product("apple", 3.0, Category::Fruit)).await.unwrap();

        let removed: Option<Product> = store.find_by_id_and_delete(apple.id).await.unwrap();
        assert_eq!(removed, Some(apple.clone()));

        let again: Option<Product> = store.find_by_id_and_delete(apple.id).await.unwrap();
        assert_eq!(again, None);
        assert_eq!(store.find_by_id::<Product>(apple.id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn collections_are_independent() {
        let store = Store::open_in_memory().unwrap();
        store.save(farm("Green Acres")).await.unwrap();

        assert_eq!(store.count::<Farm>().await.unwrap(), 1);
        assert_eq!(store.count::<Product>().await.unwrap(), 0);
    }
}
