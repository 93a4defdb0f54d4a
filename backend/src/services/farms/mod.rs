//! # Farm Service Module
//!
//! Routes for listing, creating, viewing and deleting farms, and for adding
//! products to a farm.
//!
//! ## Sub-modules:
//! - `list`: all farms.
//! - `new` / `create`: the new-farm form and its submission.
//! - `show`: one farm with its products resolved.
//! - `delete`: removes a farm. Its products are left in place.
//! - `new_product` / `add_product`: the product form scoped to a farm and its
//!   submission, which links the product and the farm both ways.

mod add_product;
mod create;
mod delete;
mod list;
mod new;
mod new_product;
mod show;

use actix_web::web::{delete, get, post, scope};
use actix_web::Scope;

/// The base path for all farm routes.
const PATH: &str = "/farms";

/// Configures and returns the Actix `Scope` for all farm routes.
///
/// # Registered Routes:
///
/// *   **`GET /farms`**: `list::process`
/// *   **`GET /farms/new`**: `new::process`
/// *   **`POST /farms`**: `create::process`, redirects to `/farms`
/// *   **`GET /farms/{id}`**: `show::process`
/// *   **`DELETE /farms/{id}`**: `delete::process`, redirects to `/farms`
/// *   **`GET /farms/{id}/products/new`**: `new_product::process`
/// *   **`POST /farms/{id}/products`**: `add_product::process`, redirects to
///     `/farms/{id}`
///
/// `/new` is registered ahead of `/{id}` so it is never read as an id.
pub fn configure_routes() -> Scope {
    scope(PATH)
        .route("", get().to(list::process))
        .route("", post().to(create::process))
        .route("/new", get().to(new::process))
        .route("/{id}", get().to(show::process))
        .route("/{id}", delete().to(delete::process))
        .route("/{id}/products/new", get().to(new_product::process))
        .route("/{id}/products", post().to(add_product::process))
}
