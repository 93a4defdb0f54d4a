use crate::error::{AppError, HandlerResult};
use crate::services::parse_id;
use crate::services::products::NOT_FOUND;
use crate::state::AppState;
use actix_web::web;
use common::model::farm::Farm;
use common::model::product::Product;
use tera::Context;

/// Product detail page, with the owning farm resolved when there is one.
pub async fn process(state: web::Data<AppState>, id: web::Path<String>) -> HandlerResult {
    let id = parse_id(&id)?;
    let product: Product = state
        .store
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(NOT_FOUND))?;

    let farm: Option<Farm> = match product.farm {
        Some(farm_id) => state.store.find_by_id(farm_id).await?,
        None => None,
    };

    let mut ctx = Context::new();
    ctx.insert("product", &product);
    ctx.insert("farm", &farm);
    state.views.render("products/show.html", &ctx)
}
