use log::{info, warn};
use std::env;
use std::fmt::{Debug, Display};
use std::path::PathBuf;
use std::str::FromStr;

const DEFAULT_TEMPLATES: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/templates");
const DEFAULT_STATIC: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/static");

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// SQLite file holding the `farmStand` collections.
    pub database: PathBuf,
    pub templates: PathBuf,
    pub static_files: PathBuf,
}

impl Config {
    pub fn load() -> Self {
        Self::load_from(|key| env::var(key).ok())
    }

    /// Builds the config from any variable lookup. Missing or unparsable
    /// values fall back to their defaults.
    pub fn load_from(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            host: try_load(&lookup, "FARMSTAND_HOST", "127.0.0.1".to_string()),
            port: try_load(&lookup, "FARMSTAND_PORT", 3000),
            database: try_load(&lookup, "FARMSTAND_DB", PathBuf::from("farmStand.sqlite")),
            templates: try_load(&lookup, "FARMSTAND_TEMPLATES", PathBuf::from(DEFAULT_TEMPLATES)),
            static_files: try_load(&lookup, "FARMSTAND_STATIC", PathBuf::from(DEFAULT_STATIC)),
        }
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn try_load<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: FromStr + Debug,
    T::Err: Display,
{
    let Some(raw) = lookup(key) else {
        info!("{key} not set, using default: {default:?}");
        return default;
    };

    raw.parse().unwrap_or_else(|e| {
        warn!("Invalid {key} value {raw:?}: {e}, using default: {default:?}");
        default
    })
}
