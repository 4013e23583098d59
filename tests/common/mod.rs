use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use milvus_rs::{ClientConfig, MilvusError, RestRequest, RestTransport};
use serde_json::Value;

/// Load ClientConfig from environment when `MILVUS_INTEGRATION=1` is set.
/// Returns None and prints a SKIP message otherwise.
#[allow(dead_code)]
pub fn load_config_for_integration() -> Option<ClientConfig> {
    if std::env::var("MILVUS_INTEGRATION").ok().as_deref() != Some("1") {
        eprintln!("SKIP: set MILVUS_INTEGRATION=1 and MILVUS_* env vars to run integration tests");
        return None;
    }
    ClientConfig::from_env().ok()
}

/// Millisecond timestamp string used to make collection/partition names unique.
#[allow(dead_code)]
pub fn ts_suffix() -> String {
    let ts = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis();
    ts.to_string()
}

/// Transport that records every request and replies with a canned body.
#[allow(dead_code)]
pub struct RecordingTransport {
    pub sent: Mutex<Vec<RestRequest>>,
    pub reply: Value,
}

#[allow(dead_code)]
impl RecordingTransport {
    pub fn replying(reply: Value) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            reply,
        }
    }

    pub fn sent(&self) -> Vec<RestRequest> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl RestTransport for RecordingTransport {
    async fn send(&self, request: &RestRequest) -> Result<Value, MilvusError> {
        self.sent.lock().unwrap().push(request.clone());
        Ok(self.reply.clone())
    }
}
