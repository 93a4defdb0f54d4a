//! # Nested Product Creation
//!
//! Handles `POST /farms/{id}/products`.
//!
//! ## Workflow
//!
//! 1.  The submitted fields are validated into a new `Product`.
//! 2.  The farm is loaded; an unknown id fails as an unresolved record.
//! 3.  `Farm::add_product` appends the product id to the farm and points the
//!     product back at the farm.
//! 4.  The farm is saved, then the product. The two writes are independent:
//!     if the second one fails the farm keeps a reference to a product that
//!     was never stored, and the farm page simply does not list it.
//! 5.  The client is redirected to the farm page.

use crate::error::{AppError, HandlerResult};
use crate::services::parse_id;
use crate::state::AppState;
use crate::views::redirect;
use actix_web::web;
use common::model::farm::Farm;
use common::model::product::Product;
use common::requests::ProductForm;
use log::info;

pub async fn process(
    state: web::Data<AppState>,
    id: web::Path<String>,
    form: web::Form<ProductForm>,
) -> HandlerResult {
    let id = parse_id(&id)?;
    let mut product = Product::from_form(&form)?;
    let mut farm: Farm = state
        .store
        .find_by_id(id)
        .await?
        .ok_or(AppError::Unresolved { what: "farm", id })?;

    farm.add_product(&mut product);
    let farm = state.store.save(farm).await?;
    let product = state.store.save(product).await?;
    info!("Added product {} ({}) to farm {}", product.id, product.name, farm.id);

    Ok(redirect(&format!("/farms/{}", farm.id)))
}
