//! Request schema: one value type per control-plane operation, each able to
//! validate itself and render either a REST call or a gRPC message.
//!
//! Requests are created from their mandatory fields, refined through
//! `with_*` mutators that consume and return the value, and validated
//! immediately before rendering. Wire field names are fixed per field via
//! serde renames and protobuf tags, never derived from Rust identifiers.

mod create_partition;
mod has_collection;
mod load_partitions;

pub use create_partition::CreatePartitionRequest;
pub use has_collection::HasCollectionRequest;
pub use load_partitions::LoadPartitionsRequest;

use prost::Message;
use reqwest::Method;
use serde::Serialize;

use crate::config::DbNamePolicy;
use crate::error::Result;
use crate::rest::RestRequest;

/// Common contract of every request type.
pub trait ApiRequest: Serialize {
    /// gRPC message rendered by [`ApiRequest::build_grpc`].
    type Grpc: Message + Default;

    /// Operation name, used as the gRPC method name and in logs.
    const NAME: &'static str;

    /// GET for reads (query parameters), POST for mutations (JSON body).
    const METHOD: Method;

    /// Versioned REST path, prefixed with [`crate::config::ApiVersion::V1`].
    const PATH: &'static str;

    /// Check field invariants, failing on the first violation.
    fn validate_with(&self, policy: DbNamePolicy) -> Result<()>;

    /// Render the REST call without validating.
    fn rest_request(&self) -> Result<RestRequest> {
        if Self::METHOD == Method::GET {
            RestRequest::get(Self::PATH, self)
        } else {
            RestRequest::post(Self::PATH, self)
        }
    }

    /// Render the gRPC message without validating.
    fn grpc_message(&self) -> Self::Grpc;

    fn validate(&self) -> Result<()> {
        self.validate_with(DbNamePolicy::Required)
    }

    fn build_rest(&self) -> Result<RestRequest> {
        self.build_rest_with(DbNamePolicy::Required)
    }

    fn build_rest_with(&self, policy: DbNamePolicy) -> Result<RestRequest> {
        self.validate_with(policy)?;
        let request = self.rest_request()?;
        tracing::debug!(
            request = Self::NAME,
            method = %request.method,
            path = %request.path,
            "built rest request"
        );
        Ok(request)
    }

    fn build_grpc(&self) -> Result<Self::Grpc> {
        self.build_grpc_with(DbNamePolicy::Required)
    }

    fn build_grpc_with(&self, policy: DbNamePolicy) -> Result<Self::Grpc> {
        self.validate_with(policy)?;
        tracing::debug!(request = Self::NAME, "built grpc message");
        Ok(self.grpc_message())
    }

    /// Validate and encode the gRPC message to protobuf bytes.
    fn encode_grpc(&self) -> Result<Vec<u8>> {
        let message = self.build_grpc()?;
        let mut buf = Vec::with_capacity(message.encoded_len());
        message.encode(&mut buf)?;
        Ok(buf)
    }
}
