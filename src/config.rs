//! Runtime settings read from the environment (after `.env` is loaded by the binary).

use crate::error::ConfigError;
use crate::model::ListOrder;

pub const DEFAULT_DATABASE_URL: &str = "postgres://localhost/items";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_SCHEMA: &str = "public";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Which backend serves the items.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StoreKind {
    #[default]
    Postgres,
    Memory,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub database_url: String,
    pub bind_addr: String,
    /// Schema holding the `items` table. Must be a valid PostgreSQL identifier.
    pub schema: String,
    pub order: ListOrder,
    pub seed: bool,
    pub max_connections: u32,
    pub store: StoreKind,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            database_url: DEFAULT_DATABASE_URL.into(),
            bind_addr: DEFAULT_BIND_ADDR.into(),
            schema: DEFAULT_SCHEMA.into(),
            order: ListOrder::default(),
            seed: false,
            max_connections: DEFAULT_MAX_CONNECTIONS,
            store: StoreKind::default(),
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from any key lookup; unset keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut s = Settings::default();
        if let Some(v) = lookup("DATABASE_URL") {
            s.database_url = v;
        }
        if let Some(v) = lookup("ITEMS_BIND_ADDR") {
            s.bind_addr = v;
        }
        if let Some(v) = lookup("ITEMS_SCHEMA") {
            if v.trim().is_empty() {
                return Err(ConfigError::Invalid {
                    key: "ITEMS_SCHEMA",
                    value: v,
                });
            }
            s.schema = v.trim().to_string();
        }
        if let Some(v) = lookup("ITEMS_ORDER") {
            s.order = v.parse()?;
        }
        if let Some(v) = lookup("ITEMS_SEED") {
            s.seed = parse_bool("ITEMS_SEED", &v)?;
        }
        if let Some(v) = lookup("ITEMS_MAX_CONNECTIONS") {
            s.max_connections = v
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or(ConfigError::Invalid {
                    key: "ITEMS_MAX_CONNECTIONS",
                    value: v.clone(),
                })?;
        }
        if let Some(v) = lookup("ITEMS_STORE") {
            s.store = match v.trim().to_ascii_lowercase().as_str() {
                "postgres" => StoreKind::Postgres,
                "memory" => StoreKind::Memory,
                _ => {
                    return Err(ConfigError::Invalid {
                        key: "ITEMS_STORE",
                        value: v,
                    })
                }
            };
        }
        Ok(s)
    }
}

fn parse_bool(key: &'static str, v: &str) -> Result<bool, ConfigError> {
    match v.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::Invalid {
            key,
            value: v.to_string(),
        }),
    }
}
