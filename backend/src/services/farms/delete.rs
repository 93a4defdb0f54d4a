use crate::error::HandlerResult;
use crate::services::parse_id;
use crate::state::AppState;
use crate::views::redirect;
use actix_web::web;
use common::model::farm::Farm;
use log::info;

/// Removes the farm, whether or not it exists. Products that reference it
/// are not touched.
pub async fn process(state: web::Data<AppState>, id: web::Path<String>) -> HandlerResult {
    let id = parse_id(&id)?;
    if let Some(farm) = state.store.find_by_id_and_delete::<Farm>(id).await? {
        info!("Deleted farm {} ({})", farm.id, farm.name);
    }

    Ok(redirect("/farms"))
}
