use std::sync::Arc;
use std::time::SystemTime;

use serde_json::Value;

use crate::client::MilvusClient;
use crate::config::ClientConfig;
use crate::error::{MilvusError, Result};
use crate::schema::ApiRequest;

/// Shared inner state for synchronous wrappers.
///
/// Holds a Tokio runtime and the underlying async `MilvusClient`.
struct Inner {
    rt: tokio::runtime::Runtime,
    client: MilvusClient,
}

/// Blocking/synchronous wrapper around [`MilvusClient`].
///
/// This type is only available when the `sync` feature is enabled. It runs all
/// operations on an internal Tokio runtime using `block_on`.
///
/// Note: do not call these blocking APIs from within an existing Tokio runtime,
/// as that can lead to deadlocks. In async contexts, use the async
/// [`MilvusClient`] APIs directly instead.
#[derive(Clone)]
pub struct SyncMilvusClient {
    inner: Arc<Inner>,
}

impl SyncMilvusClient {
    /// Build a synchronous client from a [`ClientConfig`].
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        Self::from_client(MilvusClient::from_config(config)?)
    }

    /// Build a synchronous client from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_client(MilvusClient::from_env()?)
    }

    /// Wrap an already configured async client.
    pub fn from_client(client: MilvusClient) -> Result<Self> {
        let rt = tokio::runtime::Runtime::new()
            .map_err(|e| MilvusError::Other(anyhow::Error::new(e)))?;
        Ok(Self {
            inner: Arc::new(Inner { rt, client }),
        })
    }

    pub fn database(&self) -> &str {
        self.inner.client.database()
    }

    pub fn execute<R: ApiRequest>(&self, request: &R) -> Result<Value> {
        self.inner.rt.block_on(self.inner.client.execute(request))
    }

    pub fn create_partition(&self, collection_name: &str, partition_name: &str) -> Result<()> {
        self.inner.rt.block_on(
            self.inner
                .client
                .create_partition(collection_name, partition_name),
        )
    }

    pub fn has_collection(&self, collection_name: &str, as_of: Option<SystemTime>) -> Result<bool> {
        self.inner
            .rt
            .block_on(self.inner.client.has_collection(collection_name, as_of))
    }

    pub fn load_partitions<I, S>(
        &self,
        collection_name: &str,
        partition_names: I,
        replica_number: i32,
    ) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.inner.rt.block_on(self.inner.client.load_partitions(
            collection_name,
            partition_names,
            replica_number,
        ))
    }
}
