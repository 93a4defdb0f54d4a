use crate::error::HandlerResult;
use crate::state::AppState;
use crate::views::redirect;
use actix_web::web;
use common::model::farm::Farm;
use common::requests::FarmForm;
use log::info;

pub async fn process(state: web::Data<AppState>, form: web::Form<FarmForm>) -> HandlerResult {
    let farm = Farm::from_form(&form)?;
    let farm = state.store.save(farm).await?;
    info!("Created farm {} ({})", farm.id, farm.name);

    Ok(redirect("/farms"))
}
