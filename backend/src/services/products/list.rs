use crate::error::HandlerResult;
use crate::state::AppState;
use crate::store::Filter;
use actix_web::web;
use common::model::product::Product;
use common::requests::ProductQuery;
use tera::Context;

/// Lists every product, or only those of `?category=`.
///
/// The category is matched as given, so an unknown one yields an empty list
/// rather than an error. It doubles as the page title; without it the title
/// is "All".
pub async fn process(state: web::Data<AppState>, query: web::Query<ProductQuery>) -> HandlerResult {
    let (products, title): (Vec<Product>, &str) = match query.category() {
        Some(category) => (
            state.store.find(Filter::eq("category", category)).await?,
            category,
        ),
        None => (state.store.find(Filter::all()).await?, "All"),
    };

    let mut ctx = Context::new();
    ctx.insert("products", &products);
    ctx.insert("title", title);
    state.views.render("products/index.html", &ctx)
}
