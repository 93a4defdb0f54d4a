use crate::error::{AppError, HandlerResult};
use crate::services::parse_id;
use crate::services::products::NOT_FOUND;
use crate::state::AppState;
use actix_web::web;
use common::model::category::CATEGORIES;
use common::model::product::Product;
use tera::Context;

pub async fn process(state: web::Data<AppState>, id: web::Path<String>) -> HandlerResult {
    let id = parse_id(&id)?;
    let product: Product = state
        .store
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(NOT_FOUND))?;

    let mut ctx = Context::new();
    ctx.insert("product", &product);
    ctx.insert("categories", &CATEGORIES);
    state.views.render("products/edit.html", &ctx)
}
