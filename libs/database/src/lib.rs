//! Database connectors and utilities
//!
//! # Features
//!
//! - `mongodb` (default) - MongoDB config, connector and health checks
//! - `config` - `core_config::FromEnv` support for the connector configs
//! - `all` - everything
//!
//! # Example
//!
//! ```ignore
//! use database::mongodb::{MongoConfig, connect_from_config_with_retry};
//!
//! let config = MongoConfig::new("mongodb://localhost:27017", "shop");
//! let client = connect_from_config_with_retry(&config, None).await?;
//! let db = client.database(config.database());
//! ```

pub mod common;

#[cfg(feature = "mongodb")]
pub mod mongodb;

pub use common::{DatabaseError, DatabaseResult};
