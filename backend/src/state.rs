//! Shared application state handed to every route handler.
//!
//! Built once at startup (see `lib.rs`) and registered as `web::Data`, so
//! handlers receive it through the `web::Data<AppState>` extractor. Nothing
//! in here is mutated per request: the store handle serializes its own
//! access and the templates are read-only after loading.

use crate::config::Config;
use crate::store::Store;
use crate::views::Views;
use log::info;
use std::io;

pub struct AppState {
    /// Handle to the farms and products collections.
    pub store: Store,
    /// Compiled HTML templates.
    pub views: Views,
}

impl AppState {
    pub fn new(store: Store, views: Views) -> Self {
        Self { store, views }
    }

    /// Opens the store and loads the templates named by `config`.
    pub fn from_config(config: &Config) -> io::Result<Self> {
        let store = Store::open(&config.database).map_err(io::Error::other)?;
        info!("Store open at {}", config.database.display());

        let views = Views::load(&config.templates).map_err(io::Error::other)?;
        info!("Templates loaded from {}", config.templates.display());

        Ok(Self::new(store, views))
    }
}
