use crate::error::{AppError, HandlerResult};
use crate::services::parse_id;
use crate::state::AppState;
use actix_web::web;
use common::model::category::CATEGORIES;
use common::model::farm::Farm;
use tera::Context;

/// Product form whose submission goes to `POST /farms/{id}/products`.
pub async fn process(state: web::Data<AppState>, id: web::Path<String>) -> HandlerResult {
    let id = parse_id(&id)?;
    let farm: Farm = state
        .store
        .find_by_id(id)
        .await?
        .ok_or(AppError::Unresolved { what: "farm", id })?;

    let mut ctx = Context::new();
    ctx.insert("categories", &CATEGORIES);
    ctx.insert("farm", &farm);
    state.views.render("products/new.html", &ctx)
}
