//! Farm detail page.
//!
//! The farm's product references are resolved in list order; references to
//! products that no longer exist are dropped. There is no guarded 404 here:
//! an unknown farm id fails as an unresolved record (500).

use crate::error::{AppError, HandlerResult};
use crate::services::parse_id;
use crate::state::AppState;
use actix_web::web;
use common::model::farm::Farm;
use common::model::product::Product;
use tera::Context;

pub async fn process(state: web::Data<AppState>, id: web::Path<String>) -> HandlerResult {
    let id = parse_id(&id)?;
    let farm: Farm = state
        .store
        .find_by_id(id)
        .await?
        .ok_or(AppError::Unresolved { what: "farm", id })?;
    let products: Vec<Product> = state.store.find_by_ids(farm.products.clone()).await?;

    let mut ctx = Context::new();
    ctx.insert("farm", &farm);
    ctx.insert("products", &products);
    state.views.render("farms/show.html", &ctx)
}
