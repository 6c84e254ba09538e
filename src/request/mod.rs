//
//  fcp-client
//  request/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/20.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # URL and Body Construction
//!
//! Pure request-building logic: template substitution, the allow-listed
//! query string for reads, and the [`BodySpec`] intermediate that body
//! encoding produces before conversion into a `reqwest` form.
//!
//! # URL grammar
//!
//! `<hostname>/<template-with-substitutions>[?query]`. Templates carry
//! `:name` path placeholders drawn from a fixed set (client id, site,
//! container, config tag, product, code id, module hash). A placeholder
//! with no matching option value degrades to the literal text `undefined`
//! — a long-standing platform quirk that callers rely on being permissive,
//! preserved here deliberately.
//!
//! # Query strings
//!
//! GET requests append `wire-name=value` pairs joined with `&`, but only
//! for keys on the allow list below; anything else is silently omitted.
//! Array-valued search terms are comma-joined first.
//!
//! # Bodies
//!
//! Non-multipart bodies are URL-encoded forms with one entry per option
//! key. Multipart bodies attach the five content fields as file parts with
//! fixed `{filename, content-type}` pairs and stringify booleans. The
//! internal `commands` meta key, and the path/raw intermediate slots of
//! content fields, are never encoded.

use crate::endpoint::EndpointDescriptor;
use crate::options::content::ContentField;
use crate::options::{Field, OptionValue, RequestOptions};

/// Allow list of query-capable fields: internal name → wire name, in the
/// order pairs are emitted.
pub const QUERY_PARAMS: [(Field, &str); 10] = [
    (Field::Active, "active"),
    (Field::ClientId, "client_id"),
    (Field::Deleted, "deleted"),
    (Field::Duplicates, "duplicates"),
    (Field::FromDate, "from_date"),
    (Field::Inactive, "inactive"),
    (Field::Latest, "latest"),
    (Field::SearchTerms, "search"),
    (Field::ToDate, "to_date"),
    (Field::VendorCode, "vendor_code"),
];

/// Fixed `{filename, content-type}` pairs for content-field file parts.
pub fn attachment(content: ContentField) -> (&'static str, &'static str) {
    match content {
        ContentField::Code => ("code.zip", "application/octet-stream"),
        ContentField::Config => ("config.js", "application/javascript"),
        ContentField::File => ("file.zip", "application/octet-stream"),
        ContentField::Json => ("config.json", "application/json"),
        ContentField::Module => ("module.zip", "application/octet-stream"),
    }
}

/// Builds the fully qualified URL for one call.
///
/// Substitutes `:name` placeholders from the options (missing values
/// degrade to the literal `undefined`) and, for GET endpoints, appends the
/// allow-listed query string.
///
/// # Example
///
/// ```rust
/// use fcp_client::{Action, RequestOptions, endpoint, request};
///
/// let descriptor = endpoint::lookup(Action::Set, "config").unwrap();
/// let opts = RequestOptions::new()
///     .with("sitekey", "acme")
///     .with("container", "prod")
///     .with("configTag", "v3");
/// let url = request::build_url("https://fcp.example.com", descriptor, &opts);
/// assert_eq!(url, "https://fcp.example.com/sites/acme/containers/prod/configs/v3");
/// ```
pub fn build_url(hostname: &str, descriptor: &EndpointDescriptor, options: &RequestOptions) -> String {
    let path: Vec<String> = descriptor
        .url_template
        .split('/')
        .map(|segment| match segment.strip_prefix(':') {
            Some(name) => substitute(name, options),
            None => segment.to_string(),
        })
        .collect();

    let mut url = format!(
        "{}/{}",
        hostname.trim_end_matches('/'),
        path.join("/")
    );

    if descriptor.method == reqwest::Method::GET {
        let query = build_query(options);
        if !query.is_empty() {
            url.push('?');
            url.push_str(&query);
        }
    }
    url
}

/// Resolves one placeholder name against the options.
fn substitute(name: &str, options: &RequestOptions) -> String {
    Field::from_key(name)
        .and_then(|field| options.field(field))
        .map(OptionValue::to_text)
        // Preserved quirk: unmatched placeholders degrade to "undefined".
        .unwrap_or_else(|| "undefined".to_string())
}

/// Builds the allow-listed query string for read/list operations.
///
/// Iterates the allow list in order, emitting `wire-name=value` pairs
/// joined with `&`. Unlisted option keys are silently omitted, never
/// errored; list values are comma-joined.
pub fn build_query(options: &RequestOptions) -> String {
    QUERY_PARAMS
        .iter()
        .filter_map(|(field, wire)| {
            options
                .field(*field)
                .map(|value| format!("{wire}={}", value.to_text()))
        })
        .collect::<Vec<_>>()
        .join("&")
}

/// One encoded body entry.
#[derive(Debug, Clone, PartialEq)]
pub enum BodyPart {
    /// A plain text form entry.
    Text {
        /// The wire-format entry name.
        name: String,
        /// The stringified value.
        value: String,
    },
    /// A file attachment (multipart only).
    File {
        /// The wire-format entry name.
        name: String,
        /// The fixed filename for this content field.
        filename: &'static str,
        /// The fixed content type for this content field.
        content_type: &'static str,
        /// The payload bytes.
        bytes: Vec<u8>,
    },
}

/// The encoded request body, before conversion into a `reqwest` form.
///
/// Kept as an inspectable intermediate so body construction is testable
/// without a transport; [`BodySpec::into_multipart`] and
/// [`BodySpec::into_form_pairs`] perform the final conversion.
#[derive(Debug, Clone, Default)]
pub struct BodySpec {
    /// Whether this body must be sent as a multipart form.
    pub multipart: bool,
    /// The encoded entries, in field order followed by extras.
    pub parts: Vec<BodyPart>,
}

impl BodySpec {
    /// The file parts of this body.
    pub fn files(&self) -> impl Iterator<Item = &BodyPart> {
        self.parts
            .iter()
            .filter(|part| matches!(part, BodyPart::File { .. }))
    }

    /// Converts into a `reqwest` multipart form, with boundary metadata
    /// managed by the form encoder.
    pub fn into_multipart(self) -> reqwest::multipart::Form {
        let mut form = reqwest::multipart::Form::new();
        for part in self.parts {
            form = match part {
                BodyPart::Text { name, value } => form.text(name, value),
                BodyPart::File {
                    name,
                    filename,
                    content_type,
                    bytes,
                } => {
                    let file = reqwest::multipart::Part::bytes(bytes)
                        .file_name(filename)
                        .mime_str(content_type)
                        .expect("static content types are valid mime strings");
                    form.part(name, file)
                }
            };
        }
        form
    }

    /// Converts into `(name, value)` pairs for URL-encoded bodies.
    pub fn into_form_pairs(self) -> Vec<(String, String)> {
        self.parts
            .into_iter()
            .filter_map(|part| match part {
                BodyPart::Text { name, value } => Some((name, value)),
                BodyPart::File { .. } => None,
            })
            .collect()
    }
}

/// Encodes the request body for one call.
///
/// One entry per option key, excluding the internal `commands` meta key
/// and the path/raw intermediate slots of content fields. In multipart
/// mode the five content fields become file parts via [`attachment`];
/// in form mode a content field that somehow carries bytes is dropped
/// with a warning, since a URL-encoded body cannot carry a file.
pub fn encode_body(options: &RequestOptions, multipart: bool) -> BodySpec {
    let mut parts = Vec::new();

    for (field, value) in options.fields() {
        if field == Field::Commands || field.is_content_intermediate() {
            continue;
        }
        match field.content_field() {
            Some(content) if multipart => {
                let bytes = match value {
                    OptionValue::Bytes(b) => b.clone(),
                    other => other.to_text().into_bytes(),
                };
                let (filename, content_type) = attachment(content);
                parts.push(BodyPart::File {
                    name: field.wire_name().to_string(),
                    filename,
                    content_type,
                    bytes,
                });
            }
            Some(content) => {
                tracing::warn!(field = content.key(), "dropping content field from form body");
            }
            None => parts.push(BodyPart::Text {
                name: field.wire_name().to_string(),
                value: value.to_text(),
            }),
        }
    }

    for (key, value) in options.extras() {
        parts.push(BodyPart::Text {
            name: key.to_string(),
            value: value.to_text(),
        });
    }

    BodySpec { multipart, parts }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoint::{lookup, Action};

    #[test]
    fn test_substitutes_every_placeholder() {
        let descriptor = lookup(Action::Set, "config").unwrap();
        let opts = RequestOptions::new()
            .with("site", "acme")
            .with("container", "prod")
            .with("configTag", "v3");
        let url = build_url("https://fcp.example.com", descriptor, &opts);
        assert_eq!(
            url,
            "https://fcp.example.com/sites/acme/containers/prod/configs/v3"
        );
        assert!(!url.contains(':'), "no leftover placeholders: {url}");
    }

    #[test]
    fn test_unmatched_placeholder_degrades_to_undefined() {
        let descriptor = lookup(Action::Get, "client").unwrap();
        let url = build_url("https://fcp.example.com", descriptor, &RequestOptions::new());
        assert_eq!(url, "https://fcp.example.com/clients/undefined");
    }

    #[test]
    fn test_query_respects_allow_list() {
        let opts = RequestOptions::new()
            .with("active", true)
            .with("extra", "x");
        let query = build_query(&opts);
        assert_eq!(query, "active=true");
    }

    #[test]
    fn test_query_joins_pairs_and_search_terms() {
        let opts = RequestOptions::new()
            .with("searchTerms", vec!["acme".to_string(), "beta".to_string()])
            .with("clientId", 9);
        assert_eq!(build_query(&opts), "client_id=9&search=acme,beta");
    }

    #[test]
    fn test_post_urls_carry_no_query() {
        let descriptor = lookup(Action::Create, "site").unwrap();
        let opts = RequestOptions::new().with("clientId", 9).with("active", true);
        let url = build_url("https://fcp.example.com", descriptor, &opts);
        assert_eq!(url, "https://fcp.example.com/sites");
    }

    #[test]
    fn test_multipart_attaches_single_code_file() {
        let opts = RequestOptions::new()
            .with("code", b"PK\x03\x04".to_vec())
            .with("version", "1.2.3");
        let body = encode_body(&opts, true);

        let files: Vec<_> = body.files().collect();
        assert_eq!(files.len(), 1);
        match files[0] {
            BodyPart::File {
                name,
                filename,
                content_type,
                ..
            } => {
                assert_eq!(name, "code");
                assert_eq!(*filename, "code.zip");
                assert_eq!(*content_type, "application/octet-stream");
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_booleans_stringified_and_meta_excluded() {
        let opts = RequestOptions::new()
            .with("latest", true)
            .with("commands", "create code")
            .with("notes", "r1");
        let body = encode_body(&opts, false);
        let pairs = body.into_form_pairs();
        assert!(pairs.contains(&("latest".to_string(), "true".to_string())));
        assert!(pairs.contains(&("notes".to_string(), "r1".to_string())));
        assert!(!pairs.iter().any(|(name, _)| name == "commands"));
    }

    #[test]
    fn test_intermediate_slots_never_encoded() {
        let opts = RequestOptions::new()
            .with("codePath", "/tmp/code")
            .with("codeBuf", b"zz".to_vec())
            .with("code", b"zz".to_vec());
        let body = encode_body(&opts, true);
        assert_eq!(body.parts.len(), 1);
        assert!(matches!(&body.parts[0], BodyPart::File { name, .. } if name == "code"));
    }

    #[test]
    fn test_config_attachment_table() {
        assert_eq!(
            attachment(ContentField::Config),
            ("config.js", "application/javascript")
        );
        assert_eq!(
            attachment(ContentField::Json),
            ("config.json", "application/json")
        );
        assert_eq!(
            attachment(ContentField::Module),
            ("module.zip", "application/octet-stream")
        );
    }
}
