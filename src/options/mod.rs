//
//  fcp-client
//  options/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/20.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # Request Options and Field Canonicalization
//!
//! This module provides the loosely-typed option set callers hand to
//! [`FcpClient::call`](crate::FcpClient::call), together with the canonical
//! [`Field`] enum that replaces the platform's historical camelCase /
//! snake_case key duplication.
//!
//! # Overview
//!
//! The wire protocol spells several keys in snake_case (`client_id`,
//! `config_tag`, `module_md5`, ...) while the caller-facing vocabulary uses
//! camelCase (`clientId`, `configTag`, `moduleMD5`, ...). Instead of carrying
//! both spellings as ambient duplicate state, every key is canonicalized to a
//! [`Field`] at the insertion boundary, and the wire spelling is re-derived
//! from [`Field::wire_name`] at the URL/query/body construction boundary.
//!
//! Canonicalization is idempotent, and both spellings of a key always read
//! the same slot:
//!
//! ```rust
//! use fcp_client::RequestOptions;
//!
//! let opts = RequestOptions::new().with("clientId", 42);
//! assert_eq!(opts.get("clientId"), opts.get("client_id"));
//! ```
//!
//! Keys outside the canonical vocabulary are kept verbatim in a pass-through
//! map: they are included in request bodies but never in query strings.
//!
//! # Last Write Wins
//!
//! Inserting either spelling of a dual-keyed field overwrites the previous
//! value; there is no conflict detection.

use std::collections::BTreeMap;
use std::fmt;

pub mod content;

use content::ContentField;

/// Canonical identifier for every known option key.
///
/// `Field` is the single source of truth for the request vocabulary: the
/// caller-facing camelCase spelling lives in [`Field::key`], the snake_case
/// wire spelling in [`Field::wire_name`], and the accepted input spellings
/// in [`Field::from_key`].
///
/// # Example
///
/// ```rust
/// use fcp_client::options::Field;
///
/// assert_eq!(Field::from_key("clientId"), Some(Field::ClientId));
/// assert_eq!(Field::from_key("client_id"), Some(Field::ClientId));
/// assert_eq!(Field::ClientId.wire_name(), "client_id");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    /// Numeric client identifier (`clientId` / `client_id`).
    ClientId,
    /// Site key (`sitekey` / `site` / `site_name` on the wire).
    Site,
    /// Container name within a site.
    Container,
    /// Config tag (`configTag` / `config_tag`).
    ConfigTag,
    /// Product name within a container.
    Product,
    /// Numeric code archive identifier (`codeId` / `code_id`).
    CodeId,
    /// Shared module name (`moduleName` / `module_name`).
    ModuleName,
    /// Shared module MD5 hash (`moduleMD5` / `module_md5`).
    ModuleMd5,
    /// Vendor code (`vendorCode` / `vendor_code`).
    VendorCode,
    /// Prerelease code (`prereleaseCode` / `prerelease_code`).
    PrereleaseCode,
    /// Semantic version string for code and module uploads.
    Version,
    /// Latest marker: `true`, `false`, or `invalid`.
    Latest,
    /// Display name for clients, sites, and containers.
    Name,
    /// Free-form search metadata attached to clients.
    Metadata,
    /// Release notes attached to mutating calls.
    Notes,
    /// Search terms for listings (`searchTerms`, `search` on the wire).
    SearchTerms,
    /// Listing filter: only active entries.
    Active,
    /// Listing filter: only deleted entries.
    Deleted,
    /// Listing filter: include duplicates.
    Duplicates,
    /// Listing filter: only inactive entries.
    Inactive,
    /// Listing filter: lower date bound (`fromDate` / `from_date`).
    FromDate,
    /// Listing filter: upper date bound (`toDate` / `to_date`).
    ToDate,
    /// Internal meta key carrying caller CLI arguments; never encoded
    /// into a request.
    Commands,

    /// Final code archive bytes.
    Code,
    /// Raw code buffer, promoted to [`Field::Code`] during resolution.
    CodeBuf,
    /// Path to a code directory, zipped during resolution.
    CodePath,
    /// Final config bytes.
    Config,
    /// Raw config string, promoted to [`Field::Config`] during resolution.
    ConfigStr,
    /// Path to a config file, read during resolution.
    ConfigPath,
    /// Final file archive bytes.
    File,
    /// Raw file buffer, promoted to [`Field::File`] during resolution.
    FileBuf,
    /// Path to a file payload, resolved during resolution.
    FilePath,
    /// Final JSON config bytes.
    Json,
    /// Raw JSON string, promoted to [`Field::Json`] during resolution.
    JsonStr,
    /// Path to a JSON file, read during resolution.
    JsonPath,
    /// Final module archive bytes.
    Module,
    /// Raw module buffer, promoted to [`Field::Module`] during resolution.
    ModuleBuf,
    /// Path to a module directory, zipped during resolution.
    ModulePath,
}

impl Field {
    /// Resolves an input key in either spelling to its canonical field.
    ///
    /// Returns `None` for keys outside the canonical vocabulary; such keys
    /// are carried verbatim as pass-through extras.
    pub fn from_key(key: &str) -> Option<Field> {
        Some(match key {
            "clientId" | "client_id" => Field::ClientId,
            "sitekey" | "site" | "site_name" => Field::Site,
            "container" => Field::Container,
            "configTag" | "config_tag" => Field::ConfigTag,
            "product" => Field::Product,
            "codeId" | "code_id" => Field::CodeId,
            "moduleName" | "module_name" => Field::ModuleName,
            "moduleMD5" | "module_md5" => Field::ModuleMd5,
            "vendorCode" | "vendor_code" => Field::VendorCode,
            "prereleaseCode" | "prerelease_code" => Field::PrereleaseCode,
            "version" => Field::Version,
            "latest" => Field::Latest,
            "name" => Field::Name,
            "metadata" => Field::Metadata,
            "notes" => Field::Notes,
            "searchTerms" | "search_terms" => Field::SearchTerms,
            "active" => Field::Active,
            "deleted" => Field::Deleted,
            "duplicates" => Field::Duplicates,
            "inactive" => Field::Inactive,
            "fromDate" | "from_date" => Field::FromDate,
            "toDate" | "to_date" => Field::ToDate,
            "commands" => Field::Commands,
            "code" => Field::Code,
            "codeBuf" | "code_buf" => Field::CodeBuf,
            "codePath" | "code_path" => Field::CodePath,
            "config" => Field::Config,
            "configStr" | "config_str" => Field::ConfigStr,
            "configPath" | "config_path" => Field::ConfigPath,
            "file" => Field::File,
            "fileBuf" | "file_buf" => Field::FileBuf,
            "filePath" | "file_path" => Field::FilePath,
            "json" => Field::Json,
            "jsonStr" | "json_str" => Field::JsonStr,
            "jsonPath" | "json_path" => Field::JsonPath,
            "module" => Field::Module,
            "moduleBuf" | "module_buf" => Field::ModuleBuf,
            "modulePath" | "module_path" => Field::ModulePath,
            _ => return None,
        })
    }

    /// The caller-facing camelCase spelling.
    pub fn key(&self) -> &'static str {
        match self {
            Field::ClientId => "clientId",
            Field::Site => "sitekey",
            Field::Container => "container",
            Field::ConfigTag => "configTag",
            Field::Product => "product",
            Field::CodeId => "codeId",
            Field::ModuleName => "moduleName",
            Field::ModuleMd5 => "moduleMD5",
            Field::VendorCode => "vendorCode",
            Field::PrereleaseCode => "prereleaseCode",
            Field::Version => "version",
            Field::Latest => "latest",
            Field::Name => "name",
            Field::Metadata => "metadata",
            Field::Notes => "notes",
            Field::SearchTerms => "searchTerms",
            Field::Active => "active",
            Field::Deleted => "deleted",
            Field::Duplicates => "duplicates",
            Field::Inactive => "inactive",
            Field::FromDate => "fromDate",
            Field::ToDate => "toDate",
            Field::Commands => "commands",
            Field::Code => "code",
            Field::CodeBuf => "codeBuf",
            Field::CodePath => "codePath",
            Field::Config => "config",
            Field::ConfigStr => "configStr",
            Field::ConfigPath => "configPath",
            Field::File => "file",
            Field::FileBuf => "fileBuf",
            Field::FilePath => "filePath",
            Field::Json => "json",
            Field::JsonStr => "jsonStr",
            Field::JsonPath => "jsonPath",
            Field::Module => "module",
            Field::ModuleBuf => "moduleBuf",
            Field::ModulePath => "modulePath",
        }
    }

    /// The snake_case spelling consumed by URL, query, and body construction.
    pub fn wire_name(&self) -> &'static str {
        match self {
            Field::ClientId => "client_id",
            Field::Site => "site_name",
            Field::Container => "container",
            Field::ConfigTag => "config_tag",
            Field::Product => "product",
            Field::CodeId => "code_id",
            Field::ModuleName => "module_name",
            Field::ModuleMd5 => "module_md5",
            Field::VendorCode => "vendor_code",
            Field::PrereleaseCode => "prerelease_code",
            Field::Version => "version",
            Field::Latest => "latest",
            Field::Name => "name",
            Field::Metadata => "metadata",
            Field::Notes => "notes",
            Field::SearchTerms => "search",
            Field::Active => "active",
            Field::Deleted => "deleted",
            Field::Duplicates => "duplicates",
            Field::Inactive => "inactive",
            Field::FromDate => "from_date",
            Field::ToDate => "to_date",
            Field::Commands => "commands",
            Field::Code => "code",
            Field::CodeBuf => "code_buf",
            Field::CodePath => "code_path",
            Field::Config => "config",
            Field::ConfigStr => "config_str",
            Field::ConfigPath => "config_path",
            Field::File => "file",
            Field::FileBuf => "file_buf",
            Field::FilePath => "file_path",
            Field::Json => "json",
            Field::JsonStr => "json_str",
            Field::JsonPath => "json_path",
            Field::Module => "module",
            Field::ModuleBuf => "module_buf",
            Field::ModulePath => "module_path",
        }
    }

    /// True for the intermediate slots of a content field (path or raw).
    ///
    /// Intermediate slots drive resolution but are never encoded into a
    /// request body; only the final slot carries payload.
    pub fn is_content_intermediate(&self) -> bool {
        matches!(
            self,
            Field::CodeBuf
                | Field::CodePath
                | Field::ConfigStr
                | Field::ConfigPath
                | Field::FileBuf
                | Field::FilePath
                | Field::JsonStr
                | Field::JsonPath
                | Field::ModuleBuf
                | Field::ModulePath
        )
    }

    /// The content field this slot belongs to, if any.
    pub fn content_field(&self) -> Option<ContentField> {
        match self {
            Field::Code | Field::CodeBuf | Field::CodePath => Some(ContentField::Code),
            Field::Config | Field::ConfigStr | Field::ConfigPath => Some(ContentField::Config),
            Field::File | Field::FileBuf | Field::FilePath => Some(ContentField::File),
            Field::Json | Field::JsonStr | Field::JsonPath => Some(ContentField::Json),
            Field::Module | Field::ModuleBuf | Field::ModulePath => Some(ContentField::Module),
            _ => None,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A loosely-typed option value.
///
/// Callers supply strings, numbers, booleans, byte buffers, or string lists
/// (multi-term search); the engine stringifies values at the encoding
/// boundary with [`OptionValue::to_text`].
#[derive(Clone, PartialEq)]
pub enum OptionValue {
    /// A string value (also used for filesystem paths).
    Str(String),
    /// An integer value (client ids, code ids).
    Int(i64),
    /// A boolean value; stringified as `true` / `false` when encoded.
    Bool(bool),
    /// A byte buffer (resolved content, raw uploads).
    Bytes(Vec<u8>),
    /// A list of strings; comma-joined when encoded.
    List(Vec<String>),
}

impl OptionValue {
    /// Returns the value as a string slice, if it is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            OptionValue::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the value as a byte slice, if it carries bytes.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            OptionValue::Bytes(b) => Some(b),
            _ => None,
        }
    }

    /// Stringifies the value for URL and body encoding.
    ///
    /// Booleans become `true`/`false`, integers their decimal form, and
    /// lists are comma-joined. Byte buffers are rendered lossily and should
    /// be attached as file parts instead.
    pub fn to_text(&self) -> String {
        match self {
            OptionValue::Str(s) => s.clone(),
            OptionValue::Int(i) => i.to_string(),
            OptionValue::Bool(b) => b.to_string(),
            OptionValue::Bytes(b) => String::from_utf8_lossy(b).into_owned(),
            OptionValue::List(items) => items.join(","),
        }
    }

    /// True for the empty string, which the resolver treats as still-missing.
    pub fn is_empty_str(&self) -> bool {
        matches!(self, OptionValue::Str(s) if s.is_empty())
    }
}

// Byte buffers are redacted in Debug output so the call log and tracing
// never carry payload bytes.
impl fmt::Debug for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Str(s) => write!(f, "{s:?}"),
            OptionValue::Int(i) => write!(f, "{i}"),
            OptionValue::Bool(b) => write!(f, "{b}"),
            OptionValue::Bytes(_) => f.write_str("[BUF]"),
            OptionValue::List(items) => write!(f, "{items:?}"),
        }
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        OptionValue::Str(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        OptionValue::Str(value)
    }
}

impl From<i64> for OptionValue {
    fn from(value: i64) -> Self {
        OptionValue::Int(value)
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        OptionValue::Bool(value)
    }
}

impl From<Vec<u8>> for OptionValue {
    fn from(value: Vec<u8>) -> Self {
        OptionValue::Bytes(value)
    }
}

impl From<Vec<String>> for OptionValue {
    fn from(value: Vec<String>) -> Self {
        OptionValue::List(value)
    }
}

/// The option set for one call.
///
/// `RequestOptions` owns two maps: canonical fields keyed by [`Field`], and
/// pass-through extras keyed by their original string. The client clones the
/// set at call entry, so one instance can be reused across calls and two
/// overlapping calls never share mutable state.
///
/// # Example
///
/// ```rust
/// use fcp_client::RequestOptions;
///
/// let opts = RequestOptions::new()
///     .with("sitekey", "acme")
///     .with("container", "prod")
///     .with("notes", "rollout");
/// assert_eq!(opts.get("site").and_then(|v| v.as_str()), Some("acme"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    known: BTreeMap<Field, OptionValue>,
    extra: BTreeMap<String, OptionValue>,
    non_interactive: bool,
}

impl RequestOptions {
    /// Creates an empty option set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a value under a key in either spelling, canonicalizing it.
    ///
    /// Unknown keys are preserved verbatim as pass-through extras. Last
    /// write wins for both maps.
    pub fn insert(&mut self, key: &str, value: impl Into<OptionValue>) {
        match Field::from_key(key) {
            Some(field) => {
                self.known.insert(field, value.into());
            }
            None => {
                self.extra.insert(key.to_string(), value.into());
            }
        }
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, key: &str, value: impl Into<OptionValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Marks this option set as non-interactive: missing required fields
    /// are never solicited and simply stay absent, leaving validation to
    /// the server.
    pub fn non_interactive(mut self) -> Self {
        self.non_interactive = true;
        self
    }

    /// Whether solicitation is disabled for this option set.
    pub fn is_non_interactive(&self) -> bool {
        self.non_interactive
    }

    /// Reads a value by key in either spelling.
    pub fn get(&self, key: &str) -> Option<&OptionValue> {
        match Field::from_key(key) {
            Some(field) => self.known.get(&field),
            None => self.extra.get(key),
        }
    }

    /// Reads a canonical field directly.
    pub fn field(&self, field: Field) -> Option<&OptionValue> {
        self.known.get(&field)
    }

    /// Inserts a canonical field directly.
    pub fn set_field(&mut self, field: Field, value: impl Into<OptionValue>) {
        self.known.insert(field, value.into());
    }

    /// True if the canonical field carries a value.
    pub fn contains(&self, field: Field) -> bool {
        self.known.contains_key(&field)
    }

    /// Iterates canonical entries in field order.
    pub fn fields(&self) -> impl Iterator<Item = (Field, &OptionValue)> {
        self.known.iter().map(|(f, v)| (*f, v))
    }

    /// Iterates pass-through extras in key order.
    pub fn extras(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.extra.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<'a, V: Into<OptionValue>> FromIterator<(&'a str, V)> for RequestOptions {
    fn from_iter<T: IntoIterator<Item = (&'a str, V)>>(iter: T) -> Self {
        let mut opts = RequestOptions::new();
        for (key, value) in iter {
            opts.insert(key, value);
        }
        opts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dual_keys_share_a_slot() {
        let opts = RequestOptions::new().with("clientId", 7);
        assert_eq!(opts.get("client_id"), Some(&OptionValue::Int(7)));
        assert_eq!(opts.get("clientId"), opts.get("client_id"));

        let opts = RequestOptions::new().with("module_md5", "abc");
        assert_eq!(opts.get("moduleMD5").and_then(|v| v.as_str()), Some("abc"));
    }

    #[test]
    fn test_canonicalization_is_idempotent() {
        // Re-inserting a value under its other spelling changes nothing.
        let once = RequestOptions::new().with("configTag", "v3");
        let twice = once.clone().with("config_tag", "v3");
        assert_eq!(once.get("config_tag"), twice.get("configTag"));
        assert_eq!(twice.fields().count(), 1);
    }

    #[test]
    fn test_last_write_wins() {
        let opts = RequestOptions::new()
            .with("vendorCode", "AAAA")
            .with("vendor_code", "BBBB");
        assert_eq!(opts.get("vendorCode").and_then(|v| v.as_str()), Some("BBBB"));
    }

    #[test]
    fn test_unknown_keys_pass_through() {
        let opts = RequestOptions::new().with("customFlag", "x");
        assert_eq!(opts.get("customFlag").and_then(|v| v.as_str()), Some("x"));
        assert_eq!(opts.fields().count(), 0);
        assert_eq!(opts.extras().count(), 1);
    }

    #[test]
    fn test_value_stringification() {
        assert_eq!(OptionValue::Bool(true).to_text(), "true");
        assert_eq!(OptionValue::Int(42).to_text(), "42");
        assert_eq!(
            OptionValue::List(vec!["a".into(), "b".into()]).to_text(),
            "a,b"
        );
    }

    #[test]
    fn test_buffers_redacted_in_debug() {
        let value = OptionValue::Bytes(vec![1, 2, 3]);
        assert_eq!(format!("{value:?}"), "[BUF]");
    }

    #[test]
    fn test_site_spellings() {
        for key in ["sitekey", "site", "site_name"] {
            assert_eq!(Field::from_key(key), Some(Field::Site));
        }
        assert_eq!(Field::Site.wire_name(), "site_name");
    }
}
