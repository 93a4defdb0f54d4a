//! # Route Services
//!
//! Every HTTP route of the farm stand, grouped the way the URLs are:
//!
//! - `home`: `GET /`, the landing page.
//! - `farms`: everything under `/farms`, including products created through a
//!   farm (`/farms/{id}/products`).
//! - `products`: everything under `/products`.
//!
//! Each handler performs one store operation per collection it touches and
//! either renders a template or redirects. Handlers return `HandlerResult`,
//! so a failing store call, a failed validation or a missing record reaches
//! the error middleware through `?` alone.

pub mod farms;
mod home;
pub mod products;

use crate::error::{form_config, query_config, AppError};
use crate::store::StoreError;
use actix_web::web;
use common::model::id::DocId;

/// Registers every route plus the extractor configs that send malformed
/// payloads into `AppError`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(form_config())
        .app_data(query_config())
        .route("/", web::get().to(home::process))
        .service(farms::configure_routes())
        .service(products::configure_routes());
}

/// Parses an id taken from the URL.
pub(crate) fn parse_id(raw: &str) -> Result<DocId, AppError> {
    raw.parse::<DocId>()
        .map_err(|e| AppError::Store(StoreError::from(e)))
}
