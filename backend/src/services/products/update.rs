use crate::error::{AppError, HandlerResult};
use crate::services::parse_id;
use crate::state::AppState;
use crate::views::redirect;
use actix_web::web;
use common::model::product::Product;
use common::requests::ProductForm;
use log::info;

/// Applies the edit form to the stored product.
///
/// The fields are validated before anything is written. Unlike the detail
/// and edit pages this route has no 404: an unknown id fails as an
/// unresolved record (500).
pub async fn process(
    state: web::Data<AppState>,
    id: web::Path<String>,
    form: web::Form<ProductForm>,
) -> HandlerResult {
    let id = parse_id(&id)?;
    let form = form.into_inner();
    let product: Product = state
        .store
        .find_by_id_and_update(id, move |product: &mut Product| product.apply(&form))
        .await?
        .ok_or(AppError::Unresolved { what: "product", id })?;
    info!("Updated product {} ({})", product.id, product.name);

    Ok(redirect(&format!("/products/{}", product.id)))
}
