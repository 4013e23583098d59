//! Milvus Rust SDK: request schema for the REST and gRPC APIs, plus a thin
//! REST client facade.

pub mod client;
pub mod config;
pub mod error;
pub mod grpc;
pub mod rest;
pub mod schema;
#[cfg(feature = "sync")]
pub mod sync;
pub mod transport;
pub mod types;
pub mod verify;

pub use crate::client::{MilvusClient, MilvusClientBuilder};
pub use crate::config::{ApiVersion, ClientConfig, DbNamePolicy};
pub use crate::error::{MilvusError, Result};
pub use crate::rest::RestRequest;
pub use crate::schema::{
    ApiRequest, CreatePartitionRequest, HasCollectionRequest, LoadPartitionsRequest,
};
pub use crate::transport::{HttpTransport, RestTransport};
pub use crate::types::{BoolResponse, ErrorCode, Status};

#[cfg(feature = "sync")]
pub use crate::sync::SyncMilvusClient;
