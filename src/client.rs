use std::sync::Arc;
use std::time::{Duration, SystemTime};

use serde_json::Value;

use crate::config::{ClientConfig, DbNamePolicy};
use crate::error::Result;
use crate::schema::{
    ApiRequest, CreatePartitionRequest, HasCollectionRequest, LoadPartitionsRequest,
};
use crate::transport::{HttpTransport, RestTransport};
use crate::types::{BoolResponse, Status};

/// Builder for configuring and constructing a [`MilvusClient`] over HTTP.
pub struct MilvusClientBuilder {
    endpoint: String,
    database: String,
    token: Option<String>,
    timeout_secs: u64,
    db_name_policy: DbNamePolicy,
}

/// Client facade that validates requests, renders them to REST calls and
/// sends them through a [`RestTransport`].
pub struct MilvusClient<T = HttpTransport> {
    transport: Arc<T>,
    database: String,
    db_name_policy: DbNamePolicy,
}

impl<T> Clone for MilvusClient<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            database: self.database.clone(),
            db_name_policy: self.db_name_policy,
        }
    }
}

impl MilvusClient<HttpTransport> {
    /// Build a client from a `ClientConfig`.
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        let transport = HttpTransport::from_config(&config)?;
        Ok(Self::with_transport(
            transport,
            config.database,
            config.db_name_policy,
        ))
    }

    pub fn from_env() -> Result<Self> {
        let config = ClientConfig::from_env()?;
        Self::from_config(config)
    }

    pub fn builder() -> MilvusClientBuilder {
        MilvusClientBuilder::new()
    }
}

impl<T: RestTransport> MilvusClient<T> {
    pub fn with_transport(
        transport: T,
        database: impl Into<String>,
        db_name_policy: DbNamePolicy,
    ) -> Self {
        Self {
            transport: Arc::new(transport),
            database: database.into(),
            db_name_policy,
        }
    }

    pub fn database(&self) -> &str {
        &self.database
    }

    pub fn db_name_policy(&self) -> DbNamePolicy {
        self.db_name_policy
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Validate `request` under the client's policy, send it and check the
    /// returned status. Nothing is sent when validation fails.
    pub async fn execute<R: ApiRequest>(&self, request: &R) -> Result<Value> {
        let rest = request.build_rest_with(self.db_name_policy)?;
        let response = self.transport.send(&rest).await?;
        if let Err(e) = response_status(&response)?.into_result() {
            tracing::warn!(request = R::NAME, error = %e, "milvus returned failure status");
            return Err(e);
        }
        Ok(response)
    }

    pub async fn create_partition(
        &self,
        collection_name: &str,
        partition_name: &str,
    ) -> Result<()> {
        let request = CreatePartitionRequest::create(
            collection_name,
            partition_name,
            self.database.as_str(),
        );
        self.execute(&request).await.map(|_| ())
    }

    /// Whether `collection_name` exists, optionally as of a point in time.
    pub async fn has_collection(
        &self,
        collection_name: &str,
        as_of: Option<SystemTime>,
    ) -> Result<bool> {
        let request = HasCollectionRequest::create(collection_name, self.database.as_str())
            .with_timestamp(as_of);
        let response = self.execute(&request).await?;
        let parsed: BoolResponse = serde_json::from_value(response)?;
        Ok(parsed.value)
    }

    pub async fn load_partitions<I, S>(
        &self,
        collection_name: &str,
        partition_names: I,
        replica_number: i32,
    ) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let request = LoadPartitionsRequest::create(collection_name, self.database.as_str())
            .with_partition_names(partition_names)
            .with_replica_number(replica_number);
        self.execute(&request).await.map(|_| ())
    }
}

/// Status carried by a response: either nested under `status` or the body itself.
fn response_status(response: &Value) -> Result<Status> {
    match response {
        Value::Null => Ok(Status::default()),
        Value::Object(fields) => match fields.get("status") {
            Some(status) => Ok(serde_json::from_value(status.clone())?),
            None => Ok(serde_json::from_value(response.clone())?),
        },
        _ => Ok(Status::default()),
    }
}

impl MilvusClientBuilder {
    fn new() -> Self {
        Self {
            endpoint: "http://127.0.0.1:9091/api".to_string(),
            database: ClientConfig::DEFAULT_DATABASE.to_string(),
            token: None,
            timeout_secs: ClientConfig::DEFAULT_TIMEOUT_SECS,
            db_name_policy: DbNamePolicy::Required,
        }
    }

    /// Populate the builder from `MILVUS_*` environment variables using
    /// [`ClientConfig::from_env`]. Individual fields can still be overridden
    /// afterwards via the other builder methods.
    pub fn from_env() -> Result<Self> {
        let config = ClientConfig::from_env()?;
        Ok(Self {
            endpoint: config.endpoint,
            database: config.database,
            token: config.token,
            timeout_secs: config.timeout_secs,
            db_name_policy: config.db_name_policy,
        })
    }

    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn database(mut self, database: impl Into<String>) -> Self {
        self.database = database.into();
        self
    }

    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    pub fn db_name_policy(mut self, db_name_policy: DbNamePolicy) -> Self {
        self.db_name_policy = db_name_policy;
        self
    }

    /// Build a [`MilvusClient`] using the current builder configuration.
    pub fn build(self) -> Result<MilvusClient> {
        let transport = HttpTransport::new(
            self.endpoint,
            self.token,
            Duration::from_secs(self.timeout_secs),
        )?;
        Ok(MilvusClient::with_transport(
            transport,
            self.database,
            self.db_name_policy,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_response_status_nested() {
        let response = json!({"status": {"error_code": 1, "reason": "x"}, "value": false});
        let status = response_status(&response).unwrap();
        assert!(!status.is_success());
        assert_eq!(status.reason, "x");
    }

    #[test]
    fn test_response_status_flat_and_empty() {
        assert!(response_status(&json!({})).unwrap().is_success());
        assert!(response_status(&Value::Null).unwrap().is_success());
        let response = json!({"error_code": "IllegalArgument", "reason": "bad"});
        let flat = response_status(&response).unwrap();
        assert!(!flat.is_success());
    }

    #[test]
    fn test_response_status_malformed_code() {
        let err = response_status(&json!({"status": {"error_code": [1]}})).unwrap_err();
        assert!(matches!(err, crate::error::MilvusError::Serialization(_)));
    }

    #[test]
    fn test_builder_defaults() {
        let client = MilvusClient::builder()
            .endpoint("http://localhost:19121/api")
            .database("analytics")
            .build()
            .unwrap();
        assert_eq!(client.database(), "analytics");
        assert_eq!(client.db_name_policy(), DbNamePolicy::Required);
        assert_eq!(client.transport().endpoint(), "http://localhost:19121/api");
    }
}
