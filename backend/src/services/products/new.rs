use crate::error::HandlerResult;
use crate::state::AppState;
use actix_web::web;
use common::model::category::CATEGORIES;
use common::model::farm::Farm;
use tera::Context;

pub async fn process(state: web::Data<AppState>) -> HandlerResult {
    let mut ctx = Context::new();
    ctx.insert("categories", &CATEGORIES);
    ctx.insert("farm", &None::<Farm>);
    state.views.render("products/new.html", &ctx)
}
