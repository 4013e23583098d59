use reqwest::Method;
use serde::Serialize;

use super::ApiRequest;
use crate::config::DbNamePolicy;
use crate::error::Result;
use crate::grpc;
use crate::verify;

/// Create a partition in a collection.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CreatePartitionRequest {
    #[serde(rename = "collection_name")]
    collection_name: String,
    /// The partition to create.
    #[serde(rename = "partition_name")]
    partition_name: String,
    /// Available since Milvus 2.2.9.
    #[serde(rename = "db_name")]
    db_name: String,
}

impl CreatePartitionRequest {
    pub fn create(
        collection_name: impl Into<String>,
        partition_name: impl Into<String>,
        db_name: impl Into<String>,
    ) -> Self {
        Self {
            collection_name: collection_name.into(),
            partition_name: partition_name.into(),
            db_name: db_name.into(),
        }
    }

    pub fn collection_name(&self) -> &str {
        &self.collection_name
    }

    pub fn partition_name(&self) -> &str {
        &self.partition_name
    }

    pub fn db_name(&self) -> &str {
        &self.db_name
    }
}

impl ApiRequest for CreatePartitionRequest {
    type Grpc = grpc::CreatePartitionRequest;

    const NAME: &'static str = "CreatePartition";
    const METHOD: Method = Method::POST;
    const PATH: &'static str = "/v1/partition";

    fn validate_with(&self, policy: DbNamePolicy) -> Result<()> {
        verify::arg_not_empty(&self.collection_name, "collection name cannot be empty")?;
        verify::arg_not_empty(&self.partition_name, "partition name cannot be empty")?;
        verify::db_name(&self.db_name, policy)
    }

    fn grpc_message(&self) -> Self::Grpc {
        grpc::CreatePartitionRequest {
            db_name: self.db_name.clone(),
            collection_name: self.collection_name.clone(),
            partition_name: self.partition_name.clone(),
        }
    }
}
