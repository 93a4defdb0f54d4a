use crate::error::HandlerResult;
use crate::services::parse_id;
use crate::state::AppState;
use crate::views::redirect;
use actix_web::web;
use common::model::product::Product;
use log::info;

pub async fn process(state: web::Data<AppState>, id: web::Path<String>) -> HandlerResult {
    let id = parse_id(&id)?;
    if let Some(product) = state.store.find_by_id_and_delete::<Product>(id).await? {
        info!("Deleted product {} ({})", product.id, product.name);
    }

    Ok(redirect("/products"))
}
