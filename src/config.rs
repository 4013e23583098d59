use std::env;

use crate::error::{MilvusError, Result};

/// Client configuration for the Milvus REST API.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub endpoint: String,
    pub database: String,
    pub token: Option<String>,
    pub timeout_secs: u64,
    pub db_name_policy: DbNamePolicy,
}

impl ClientConfig {
    pub const DEFAULT_DATABASE: &'static str = "default";
    pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

    /// Build configuration from environment variables:
    /// `MILVUS_ENDPOINT`, `MILVUS_DATABASE` (optional, default `default`),
    /// `MILVUS_TOKEN` (optional), `MILVUS_TIMEOUT_SECS` (optional, default 30),
    /// `MILVUS_REQUIRE_DB_NAME` (optional, default `true`).
    pub fn from_env() -> Result<Self> {
        let endpoint = require_env("MILVUS_ENDPOINT")?;
        let database =
            env::var("MILVUS_DATABASE").unwrap_or_else(|_| Self::DEFAULT_DATABASE.to_string());
        let token = env::var("MILVUS_TOKEN").ok().filter(|t| !t.is_empty());
        let timeout_secs = parse_env("MILVUS_TIMEOUT_SECS").unwrap_or(Self::DEFAULT_TIMEOUT_SECS);
        let db_name_policy = match parse_env::<bool>("MILVUS_REQUIRE_DB_NAME") {
            Some(false) => DbNamePolicy::Optional,
            _ => DbNamePolicy::Required,
        };

        Ok(Self {
            endpoint,
            database,
            token,
            timeout_secs,
            db_name_policy,
        })
    }
}

/// Whether requests must carry a non-empty database name.
///
/// Database scoping arrived in Milvus 2.2.9; older servers ignore the field.
/// `Required` matches current servers and is what `validate()` applies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DbNamePolicy {
    #[default]
    Required,
    Optional,
}

/// REST API version prefixes.
pub struct ApiVersion;

impl ApiVersion {
    pub const V1: &'static str = "/v1";
}

fn require_env(key: &str) -> Result<String> {
    env::var(key).map_err(|_| MilvusError::Config(format!("missing env: {key}")))
}

fn parse_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok().and_then(|v| v.parse::<T>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_requires_db_name() {
        assert_eq!(DbNamePolicy::default(), DbNamePolicy::Required);
    }

    const VARS: [&str; 5] = [
        "MILVUS_ENDPOINT",
        "MILVUS_DATABASE",
        "MILVUS_TOKEN",
        "MILVUS_TIMEOUT_SECS",
        "MILVUS_REQUIRE_DB_NAME",
    ];

    fn set(key: &str, value: &str) {
        // SAFETY: only this test touches MILVUS_* variables.
        unsafe { env::set_var(key, value) }
    }

    fn clear() {
        for key in VARS {
            // SAFETY: see `set`.
            unsafe { env::remove_var(key) }
        }
    }

    // One test so the steps never race on the process environment.
    #[test]
    fn from_env_reads_milvus_variables() {
        clear();
        let err = ClientConfig::from_env().unwrap_err();
        assert!(matches!(err, MilvusError::Config(ref m) if m.contains("MILVUS_ENDPOINT")));

        set("MILVUS_ENDPOINT", "http://localhost:9091/api");
        let config = ClientConfig::from_env().unwrap();
        assert_eq!(config.endpoint, "http://localhost:9091/api");
        assert_eq!(config.database, ClientConfig::DEFAULT_DATABASE);
        assert_eq!(config.token, None);
        assert_eq!(config.timeout_secs, ClientConfig::DEFAULT_TIMEOUT_SECS);
        assert_eq!(config.db_name_policy, DbNamePolicy::Required);

        set("MILVUS_DATABASE", "analytics");
        set("MILVUS_TOKEN", "root:Milvus");
        set("MILVUS_TIMEOUT_SECS", "5");
        set("MILVUS_REQUIRE_DB_NAME", "false");
        let config = ClientConfig::from_env().unwrap();
        assert_eq!(config.database, "analytics");
        assert_eq!(config.token.as_deref(), Some("root:Milvus"));
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.db_name_policy, DbNamePolicy::Optional);

        set("MILVUS_TOKEN", "");
        set("MILVUS_REQUIRE_DB_NAME", "not-a-bool");
        let config = ClientConfig::from_env().unwrap();
        assert_eq!(config.token, None);
        assert_eq!(config.db_name_policy, DbNamePolicy::Required);

        clear();
    }

    #[test]
    fn api_version_prefix() {
        assert_eq!(format!("{}/partition", ApiVersion::V1), "/v1/partition");
    }
}
