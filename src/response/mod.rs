//
//  fcp-client
//  response/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/20.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # Response Decoding
//!
//! The platform answers in one of two channels: a JSON envelope
//! `{statusCode, message}` whose `message` varies wildly in shape, or a
//! raw `application/octet-stream` archive body. This module classifies
//! both into the [`CallOutcome`] tagged union, so callers match on an
//! explicit variant instead of re-inspecting shapes at every call site.
//!
//! # Shape classification
//!
//! | `message` shape | outcome |
//! |---|---|
//! | absent, resource is `default` (or `config`) | [`CallOutcome::Config`] |
//! | absent otherwise | [`CallOutcome::Listing`] |
//! | scalar | [`CallOutcome::Status`] |
//! | object | [`CallOutcome::Entity`] |
//! | array of length 1 | [`CallOutcome::Entity`] (unwrapped) |
//! | array of length ≠ 1 | [`CallOutcome::Entities`] |
//!
//! The one-element-array unwrap is applied universally, not
//! per-resource: the platform has been observed to wrap single entities
//! (notably `get site`) and narrowing the unwrap would silently change
//! output shape for resources not yet exercised.

use serde::Deserialize;
use serde_json::Value;

use crate::archive::{ArchiveCodec, ExtractedFile};
use crate::error::{Error, Result};

/// A raw HTTP response, after the transport has drained the body.
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// The HTTP status code (always 2xx here; non-success statuses become
    /// [`Error::Server`] inside the transport).
    pub status: reqwest::StatusCode,
    /// The `Content-Type` header value, or empty if absent.
    pub content_type: String,
    /// The response body bytes.
    pub body: Vec<u8>,
}

impl RawResponse {
    /// Whether the body is a binary archive rather than JSON.
    pub fn is_archive(&self) -> bool {
        self.content_type
            .split(';')
            .next()
            .map(str::trim)
            .is_some_and(|ct| ct.eq_ignore_ascii_case("application/octet-stream"))
    }
}

/// The JSON wrapper returned by the platform.
#[derive(Debug, Clone, Deserialize)]
pub struct ResponseEnvelope {
    /// The platform's own status code, distinct from the HTTP status.
    #[serde(rename = "statusCode")]
    pub status_code: Option<i64>,
    /// The payload; absent, scalar, object, or array depending on the
    /// endpoint.
    #[serde(default)]
    pub message: Option<Value>,
}

/// The decoded result of one call: one variant per observed response
/// shape.
#[derive(Debug, Clone, PartialEq)]
pub enum CallOutcome {
    /// The whole response is a config payload (`get default`, and
    /// `config` endpoints answering without a message).
    Config(Value),
    /// No message and not a config endpoint: the top-level response is a
    /// files listing.
    Listing(Value),
    /// A plain status string.
    Status(String),
    /// A single entity — either a bare object or a one-element array,
    /// which is unwrapped.
    Entity(Value),
    /// An ordered list of entities. Empty arrays land here as an empty
    /// list.
    Entities(Vec<Value>),
    /// An archive body, extracted into its file entries.
    Files(Vec<ExtractedFile>),
}

/// Decodes a raw response for the given resource.
///
/// Octet-stream bodies are routed through the archive codec; everything
/// else is parsed as a JSON envelope and classified by [`classify`].
///
/// # Errors
///
/// - [`Error::Decode`] when a 2xx body is not valid JSON.
/// - [`Error::Archive`] when archive extraction fails (raised, never
///   returned as a usable result).
pub fn decode(raw: RawResponse, resource: &str, codec: &dyn ArchiveCodec) -> Result<CallOutcome> {
    if raw.is_archive() {
        return codec.decompress(&raw.body).map(CallOutcome::Files);
    }

    let body: Value = serde_json::from_slice(&raw.body)
        .map_err(|e| Error::Decode(format!("invalid JSON envelope: {e}")))?;
    Ok(classify(body, resource))
}

/// Classifies a JSON envelope body by the shape of its `message`.
///
/// This is a pure function of shape; see the module docs for the table.
pub fn classify(body: Value, resource: &str) -> CallOutcome {
    let message = body.get("message").cloned();
    match message {
        None | Some(Value::Null) => {
            if resource == "default" || resource == "config" {
                CallOutcome::Config(body)
            } else {
                CallOutcome::Listing(body)
            }
        }
        Some(Value::Array(items)) => {
            if items.len() == 1 {
                CallOutcome::Entity(items.into_iter().next().expect("length checked"))
            } else {
                CallOutcome::Entities(items)
            }
        }
        Some(object @ Value::Object(_)) => CallOutcome::Entity(object),
        Some(Value::String(status)) => CallOutcome::Status(status),
        Some(scalar) => CallOutcome::Status(scalar.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::archive::ZipCodec;

    #[test]
    fn test_absent_message_on_default_is_config() {
        let body = json!({"statusCode": 200, "global": {"vendor": "aa"}});
        match classify(body.clone(), "default") {
            CallOutcome::Config(payload) => assert_eq!(payload, body),
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn test_absent_message_on_config_is_config() {
        let body = json!({"statusCode": 200, "config": {"trigger": {}}});
        match classify(body.clone(), "config") {
            CallOutcome::Config(payload) => assert_eq!(payload, body),
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn test_absent_message_elsewhere_is_listing() {
        let body = json!({"files": ["a.js"]});
        assert!(matches!(
            classify(body, "code"),
            CallOutcome::Listing(_)
        ));
    }

    #[test]
    fn test_singleton_array_unwraps() {
        let body = json!({"statusCode": 200, "message": [{"name": "acme"}]});
        match classify(body, "site") {
            CallOutcome::Entity(entity) => assert_eq!(entity["name"], "acme"),
            other => panic!("expected singleton entity, got {other:?}"),
        }
    }

    #[test]
    fn test_longer_array_stays_ordered_list() {
        let body = json!({"message": [{"id": 1}, {"id": 2}]});
        match classify(body, "client") {
            CallOutcome::Entities(items) => {
                assert_eq!(items.len(), 2);
                assert_eq!(items[0]["id"], 1);
                assert_eq!(items[1]["id"], 2);
            }
            other => panic!("expected list, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_array_is_empty_list() {
        let body = json!({"message": []});
        assert_eq!(classify(body, "client"), CallOutcome::Entities(vec![]));
    }

    #[test]
    fn test_scalar_message_is_status() {
        let body = json!({"statusCode": 200, "message": "ok"});
        assert_eq!(classify(body, "code"), CallOutcome::Status("ok".into()));
    }

    #[test]
    fn test_object_message_is_entity() {
        let body = json!({"message": {"code_md5": "abc"}});
        assert!(matches!(classify(body, "code"), CallOutcome::Entity(_)));
    }

    #[test]
    fn test_octet_stream_routes_to_archive() {
        let archive = ZipCodec
            .compress(&[("gateway.js".to_string(), b"// js".to_vec())])
            .unwrap();
        let raw = RawResponse {
            status: reqwest::StatusCode::OK,
            content_type: "application/octet-stream".to_string(),
            body: archive,
        };
        match decode(raw, "code", &ZipCodec).unwrap() {
            CallOutcome::Files(files) => {
                assert_eq!(files.len(), 1);
                assert_eq!(files[0].name, "gateway.js");
            }
            other => panic!("expected files, got {other:?}"),
        }
    }

    #[test]
    fn test_corrupt_archive_raises() {
        let raw = RawResponse {
            status: reqwest::StatusCode::OK,
            content_type: "application/octet-stream".to_string(),
            body: b"not a zip".to_vec(),
        };
        assert!(matches!(
            decode(raw, "code", &ZipCodec),
            Err(Error::Archive(_))
        ));
    }

    #[test]
    fn test_malformed_json_raises_decode() {
        let raw = RawResponse {
            status: reqwest::StatusCode::OK,
            content_type: "application/json".to_string(),
            body: b"<html>".to_vec(),
        };
        assert!(matches!(decode(raw, "code", &ZipCodec), Err(Error::Decode(_))));
    }
}
