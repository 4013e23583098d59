use reqwest::Method;
use serde::Serialize;

use super::ApiRequest;
use crate::config::DbNamePolicy;
use crate::error::Result;
use crate::grpc;
use crate::verify;

/// Load partitions of a collection into query node memory.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LoadPartitionsRequest {
    #[serde(rename = "collection_name")]
    collection_name: String,
    #[serde(rename = "partition_names")]
    partition_names: Vec<String>,
    /// Number of in-memory replicas, 1 by default.
    #[serde(rename = "replica_number")]
    replica_number: i32,
    /// Available since Milvus 2.2.9.
    #[serde(rename = "db_name")]
    db_name: String,
}

impl LoadPartitionsRequest {
    pub const DEFAULT_REPLICA_NUMBER: i32 = 1;

    pub fn create(collection_name: impl Into<String>, db_name: impl Into<String>) -> Self {
        Self {
            collection_name: collection_name.into(),
            partition_names: Vec::new(),
            replica_number: Self::DEFAULT_REPLICA_NUMBER,
            db_name: db_name.into(),
        }
    }

    pub fn with_partition_names<I, S>(mut self, partition_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.partition_names = partition_names.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_replica_number(mut self, replica_number: i32) -> Self {
        self.replica_number = replica_number;
        self
    }

    pub fn collection_name(&self) -> &str {
        &self.collection_name
    }

    pub fn partition_names(&self) -> &[String] {
        &self.partition_names
    }

    pub fn replica_number(&self) -> i32 {
        self.replica_number
    }

    pub fn db_name(&self) -> &str {
        &self.db_name
    }
}

impl ApiRequest for LoadPartitionsRequest {
    type Grpc = grpc::LoadPartitionsRequest;

    const NAME: &'static str = "LoadPartitions";
    const METHOD: Method = Method::POST;
    const PATH: &'static str = "/v1/partitions/load";

    fn validate_with(&self, policy: DbNamePolicy) -> Result<()> {
        verify::arg_not_empty(&self.collection_name, "collection name cannot be empty")?;
        verify::not_empty(&self.partition_names, "partition names cannot be empty")?;
        verify::ensure(self.replica_number >= 1, "replica number must be at least 1")?;
        verify::db_name(&self.db_name, policy)
    }

    fn grpc_message(&self) -> Self::Grpc {
        grpc::LoadPartitionsRequest {
            db_name: self.db_name.clone(),
            collection_name: self.collection_name.clone(),
            partition_names: self.partition_names.clone(),
            replica_number: self.replica_number,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MilvusError;

    fn valid() -> LoadPartitionsRequest {
        LoadPartitionsRequest::create("docs", "default").with_partition_names(["2024-q1"])
    }

    #[test]
    fn default_replica_number_is_valid() {
        let req = valid();
        assert_eq!(req.replica_number(), 1);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn zero_replicas_fail() {
        let err = valid().with_replica_number(0).validate().unwrap_err();
        assert!(matches!(err, MilvusError::InvalidArgument(ref m) if m.contains("replica")));
    }

    #[test]
    fn build_grpc_validates_before_rendering() {
        let req = LoadPartitionsRequest::create("docs", "default");
        assert!(req.build_grpc().unwrap_err().is_invalid_argument());
    }

    #[test]
    fn mutators_produce_independent_values() {
        let base = valid();
        let three = base.clone().with_replica_number(3);
        assert_eq!(base.replica_number(), 1);
        assert_eq!(three.replica_number(), 3);
    }
}
