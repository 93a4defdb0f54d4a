//! Farm stand catalog: farms, the products they sell, and HTML pages to list,
//! create, edit and delete both.
//!
//! # Layout
//!
//! - `store`: the document store (SQLite, one JSON document per record).
//! - `services`: the HTTP routes, one module per URL prefix.
//! - `views`: Tera templates and the redirect helper.
//! - `error` / `middleware`: the error type handlers return and the chain
//!   that logs and renders it; method override for HTML forms.
//! - `seeds`: the fixed sample catalog used by the `seed` binary.
//!
//! # Running
//!
//! ```sh
//! cargo run --bin seed      # optional: load the sample products
//! cargo run                 # serve on 127.0.0.1:3000
//! ```
//!
//! See `config.rs` for the environment variables that change the address,
//! database file and template location.

use std::path::Path;

use actix_files::Files;
use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::middleware::{from_fn, Logger};
use actix_web::{web, App, HttpRequest, HttpServer};
use log::info;

pub mod config;
pub mod error;
pub mod middleware;
pub mod seeds;
pub mod services;
pub mod state;
pub mod store;
pub mod views;

use config::Config;
use error::{AppError, HandlerResult};
use state::AppState;

/// Builds the application around `state`.
///
/// Middleware, innermost first: error kind logging, plain-text error
/// rendering, method override, request logging.
pub fn app(
    state: web::Data<AppState>,
    static_dir: &Path,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(state)
        .wrap(from_fn(middleware::log_error_kind))
        .wrap(from_fn(middleware::render_error))
        .wrap(from_fn(middleware::method_override))
        .wrap(Logger::default())
        .service(Files::new("/static", static_dir))
        .configure(services::configure)
        .default_service(web::to(unmatched))
}

async fn unmatched(req: HttpRequest) -> HandlerResult {
    Err(AppError::not_found(format!(
        "Cannot {} {}",
        req.method(),
        req.path()
    )))
}

/// Opens the store, loads the templates and serves until shut down.
pub async fn start_server(config: Config) -> std::io::Result<()> {
    let state = web::Data::new(AppState::from_config(&config)?);
    let static_dir = config.static_files.clone();
    let address = config.address();

    info!("Server running at http://{address}");

    HttpServer::new(move || app(state.clone(), &static_dir))
        .bind(address)?
        .run()
        .await
}
