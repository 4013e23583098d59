//! Transport-ready description of a REST call.
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

use crate::error::{MilvusError, Result};

/// A REST call rendered from a request object: method, versioned path and
/// either query parameters (GET) or a JSON body (POST).
#[derive(Clone, Debug, PartialEq)]
pub struct RestRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl RestRequest {
    /// POST with the payload serialized as the JSON body.
    pub fn post<P: Serialize + ?Sized>(path: impl Into<String>, payload: &P) -> Result<Self> {
        Ok(Self {
            method: Method::POST,
            path: path.into(),
            query: Vec::new(),
            body: Some(serde_json::to_value(payload)?),
        })
    }

    /// GET with the payload's top-level fields flattened into query parameters.
    pub fn get<P: Serialize + ?Sized>(path: impl Into<String>, payload: &P) -> Result<Self> {
        Ok(Self {
            method: Method::GET,
            path: path.into(),
            query: query_pairs(payload)?,
            body: None,
        })
    }

    /// Form-urlencoded query, e.g. `collection_name=docs&time_stamp=0`.
    pub fn query_string(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.query.iter())
            .finish()
    }

    /// Compact JSON rendering of the body, if any.
    pub fn body_json(&self) -> Option<String> {
        self.body.as_ref().map(Value::to_string)
    }

    /// Value of the first query parameter named `name`.
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

fn query_pairs<P: Serialize + ?Sized>(payload: &P) -> Result<Vec<(String, String)>> {
    let Value::Object(fields) = serde_json::to_value(payload)? else {
        return Err(MilvusError::invalid(
            "query payload must serialize to a JSON object",
        ));
    };

    let mut pairs = Vec::with_capacity(fields.len());
    for (name, value) in fields {
        match value {
            Value::Null => {}
            Value::Array(items) => {
                for item in items {
                    pairs.push((name.clone(), scalar_text(item)));
                }
            }
            other => pairs.push((name, scalar_text(other))),
        }
    }
    Ok(pairs)
}

fn scalar_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Serialize)]
    struct Probe {
        name: String,
        ts: u64,
        tags: Vec<String>,
        skip: Option<String>,
    }

    fn probe() -> Probe {
        Probe {
            name: "a b".into(),
            ts: 7,
            tags: vec!["x".into(), "y".into()],
            skip: None,
        }
    }

    #[test]
    fn get_flattens_fields_in_declaration_order() {
        let req = RestRequest::get("/v1/probe", &probe()).unwrap();
        assert_eq!(req.method, Method::GET);
        assert!(req.body.is_none());
        assert_eq!(req.query_string(), "name=a+b&ts=7&tags=x&tags=y");
        assert_eq!(req.query_param("ts"), Some("7"));
        assert_eq!(req.query_param("skip"), None);
    }

    #[test]
    fn post_serializes_body() {
        let req = RestRequest::post("/v1/probe", &json!({"k": 1})).unwrap();
        assert_eq!(req.method, Method::POST);
        assert!(req.query.is_empty());
        assert_eq!(req.body_json().as_deref(), Some(r#"{"k":1}"#));
    }

    #[test]
    fn get_rejects_non_object_payload() {
        let err = RestRequest::get("/v1/probe", &json!([1, 2])).unwrap_err();
        assert!(err.is_invalid_argument());
    }
}
