use crate::error::HandlerResult;
use crate::state::AppState;
use actix_web::web;
use common::model::category::CATEGORIES;
use tera::Context;

/// New-farm form, listing the categories its products can be sold under.
pub async fn process(state: web::Data<AppState>) -> HandlerResult {
    let mut ctx = Context::new();
    ctx.insert("categories", &CATEGORIES);
    state.views.render("farms/new.html", &ctx)
}
