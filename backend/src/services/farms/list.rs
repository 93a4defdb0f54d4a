use crate::error::HandlerResult;
use crate::state::AppState;
use crate::store::Filter;
use actix_web::web;
use common::model::farm::Farm;
use tera::Context;

pub async fn process(state: web::Data<AppState>) -> HandlerResult {
    let farms: Vec<Farm> = state.store.find(Filter::all()).await?;

    let mut ctx = Context::new();
    ctx.insert("farms", &farms);
    state.views.render("farms/index.html", &ctx)
}
