//! Routes for standalone products.
//!
//! Products created here are not linked to any farm; only
//! `POST /farms/{id}/products` sets up that link.

mod create;
mod delete;
mod edit;
mod list;
mod new;
mod show;
mod update;

use actix_web::web::{delete, get, post, put, scope};
use actix_web::Scope;

const PATH: &str = "/products";

/// Message of the 404 raised by the detail and edit pages.
pub const NOT_FOUND: &str = "Product not found!";

/// Configures and returns the Actix `Scope` for all product routes.
pub fn configure_routes() -> Scope {
    scope(PATH)
        // List, optionally filtered by `?category=`.
        .route("", get().to(list::process))
        .route("", post().to(create::process))
        .route("/new", get().to(new::process))
        .route("/{id}", get().to(show::process))
        .route("/{id}", put().to(update::process))
        .route("/{id}", delete().to(delete::process))
        .route("/{id}/edit", get().to(edit::process))
}
