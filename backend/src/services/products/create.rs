use crate::error::HandlerResult;
use crate::state::AppState;
use crate::views::redirect;
use actix_web::web;
use common::model::product::Product;
use common::requests::ProductForm;
use log::info;

pub async fn process(state: web::Data<AppState>, form: web::Form<ProductForm>) -> HandlerResult {
    let product = Product::from_form(&form)?;
    let product = state.store.save(product).await?;
    info!("Created product {} ({})", product.id, product.name);

    Ok(redirect(&format!("/products/{}", product.id)))
}
