use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{MilvusError, Result};

/// Status code as rendered by protobuf JSON: the enum number or its name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorCode {
    Code(i64),
    Name(String),
}

impl ErrorCode {
    pub fn is_success(&self) -> bool {
        match self {
            ErrorCode::Code(code) => *code == 0,
            ErrorCode::Name(name) => name == "Success" || name == "0",
        }
    }
}

impl Default for ErrorCode {
    fn default() -> Self {
        ErrorCode::Code(0)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCode::Code(code) => write!(f, "{code}"),
            ErrorCode::Name(name) => f.write_str(name),
        }
    }
}

/// Operation status as returned by the service (protobuf JSON mapping).
///
/// Default-valued fields are omitted on the wire, so `{}` is a success.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Status {
    #[serde(default)]
    pub error_code: ErrorCode,
    #[serde(default)]
    pub reason: String,
}

impl Status {
    pub fn is_success(&self) -> bool {
        self.error_code.is_success()
    }

    /// Map a failed status to [`MilvusError::Server`].
    pub fn into_result(self) -> Result<()> {
        if self.is_success() {
            return Ok(());
        }
        Err(MilvusError::Server {
            code: self.error_code.to_string(),
            reason: self.reason,
        })
    }
}

/// Response of boolean queries such as `HasCollection`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BoolResponse {
    #[serde(default)]
    pub status: Status,
    #[serde(default)]
    pub value: bool,
}
