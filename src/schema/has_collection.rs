use std::time::{SystemTime, UNIX_EPOCH};

use reqwest::Method;
use serde::Serialize;

use super::ApiRequest;
use crate::config::DbNamePolicy;
use crate::error::Result;
use crate::grpc;
use crate::verify;

/// Check whether a collection exists.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HasCollectionRequest {
    #[serde(rename = "collection_name")]
    collection_name: String,
    /// Available since Milvus 2.2.9.
    #[serde(rename = "db_name")]
    db_name: String,
    /// Milliseconds since the Unix epoch; 0 means "unspecified". When set, the
    /// server only reports collections created at or before this point.
    #[serde(rename = "time_stamp")]
    timestamp: i64,
}

impl HasCollectionRequest {
    pub fn create(collection_name: impl Into<String>, db_name: impl Into<String>) -> Self {
        Self {
            collection_name: collection_name.into(),
            db_name: db_name.into(),
            timestamp: 0,
        }
    }

    /// Check existence as of `time`; `None` clears the timestamp.
    pub fn with_timestamp(self, time: Option<SystemTime>) -> Self {
        let timestamp = time.map(unix_millis).unwrap_or(0);
        self.with_raw_timestamp(timestamp)
    }

    pub fn with_raw_timestamp(mut self, timestamp: i64) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn collection_name(&self) -> &str {
        &self.collection_name
    }

    pub fn db_name(&self) -> &str {
        &self.db_name
    }

    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }
}

impl ApiRequest for HasCollectionRequest {
    type Grpc = grpc::HasCollectionRequest;

    const NAME: &'static str = "HasCollection";
    const METHOD: Method = Method::GET;
    const PATH: &'static str = "/v1/collection/existence";

    fn validate_with(&self, policy: DbNamePolicy) -> Result<()> {
        verify::arg_not_empty(&self.collection_name, "collection name cannot be empty")?;
        verify::db_name(&self.db_name, policy)?;
        verify::ensure(self.timestamp >= 0, "timestamp cannot be negative")
    }

    fn grpc_message(&self) -> Self::Grpc {
        grpc::HasCollectionRequest {
            db_name: self.db_name.clone(),
            collection_name: self.collection_name.clone(),
            time_stamp: u64::try_from(self.timestamp).unwrap_or_default(),
        }
    }
}

/// Signed milliseconds relative to the Unix epoch; negative before it.
fn unix_millis(time: SystemTime) -> i64 {
    match time.duration_since(UNIX_EPOCH) {
        Ok(after) => i64::try_from(after.as_millis()).unwrap_or(i64::MAX),
        Err(before) => i64::try_from(before.duration().as_millis())
            .map(|ms| -ms)
            .unwrap_or(i64::MIN),
    }
}
