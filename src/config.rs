use clap::{Parser, ValueEnum};
use std::fmt;
use std::net::SocketAddr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Backend {
    /// Process-local store, lost on restart.
    Memory,
    /// MongoDB collection (requires the `mongodb` feature).
    Mongo,
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Backend::Memory => write!(f, "memory"),
            Backend::Mongo => write!(f, "mongo"),
        }
    }
}

#[derive(Parser, Debug, Clone)]
#[command(name = "item-catalog", about = "Item catalog HTTP service", version)]
pub struct Config {
    #[arg(
        long,
        env = "ITEM_CATALOG_BIND",
        value_name = "ADDR",
        default_value = "127.0.0.1:8080",
        help = "Address the HTTP server listens on"
    )]
    pub bind: SocketAddr,

    #[arg(
        long,
        env = "ITEM_CATALOG_BACKEND",
        value_enum,
        default_value_t = Backend::Memory,
        help = "Document store backend"
    )]
    pub backend: Backend,

    #[arg(
        long,
        env = "ITEM_CATALOG_MONGO_URI",
        value_name = "URI",
        default_value = "mongodb://localhost:27017",
        help = "MongoDB connection string"
    )]
    pub mongo_uri: String,

    #[arg(
        long,
        env = "ITEM_CATALOG_DATABASE",
        default_value = "catalog",
        help = "Database holding the item collection"
    )]
    pub database: String,

    #[arg(
        long,
        env = "ITEM_CATALOG_COLLECTION",
        default_value = "items",
        help = "Collection holding item documents"
    )]
    pub collection: String,

    #[arg(
        long = "log",
        env = "ITEM_CATALOG_LOG",
        value_name = "FILTER",
        default_value = "info",
        help = "tracing filter directive, e.g. `info,item_catalog=debug`"
    )]
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 8080)),
            backend: Backend::Memory,
            mongo_uri: "mongodb://localhost:27017".to_string(),
            database: "catalog".to_string(),
            collection: "items".to_string(),
            log_filter: "info".to_string(),
        }
    }
}
