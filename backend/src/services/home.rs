use crate::error::HandlerResult;
use crate::state::AppState;
use actix_web::web;
use tera::Context;

pub async fn process(state: web::Data<AppState>) -> HandlerResult {
    state.views.render("home.html", &Context::new())
}
