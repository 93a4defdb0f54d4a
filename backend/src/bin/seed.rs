//! One-shot loader for the sample catalog.
//!
//! Connects to the same database as the server, inserts the six fixed
//! products and exits. Running it again inserts another copy.

use env_logger::Env;
use farm_stand::config::Config;
use farm_stand::seeds;
use farm_stand::store::Store;
use log::{error, info};
use std::process::ExitCode;

#[actix_web::main]
async fn main() -> ExitCode {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let config = Config::load();

    let store = match Store::open(&config.database) {
        Ok(store) => store,
        Err(e) => {
            error!("Failed to open {}: {e}", config.database.display());
            return ExitCode::FAILURE;
        }
    };
    info!("Store open at {}", config.database.display());

    match seeds::seed(&store).await {
        Ok(products) => {
            for product in &products {
                info!(
                    "Inserted {} {} ({}, {})",
                    product.id, product.name, product.category, product.price
                );
            }
            info!("Seeded {} products", products.len());
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Seeding failed: {e}");
            ExitCode::FAILURE
        }
    }
}
