//
//  fcp-client
//  options/content.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/20.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # Content Field Resolution
//!
//! Each of the five file-like payload slots (code, config, file, json,
//! module) can be supplied in one of three representations, tried in a
//! strict priority order:
//!
//! 1. **Final value** — bytes already present under the final slot.
//! 2. **Raw buffer/string** — promoted to the final slot.
//! 3. **Path reference** — read through the [`FileStore`] collaborator
//!    (directories are recursively archived, plain files read as text),
//!    then promoted through the raw slot to the final slot.
//!
//! A leading `~` in a path is expanded to the process's home directory.
//! Resolution is idempotent: once the final slot is populated, later
//! passes return immediately, so each field resolves at most once per call.

use std::path::{Path, PathBuf};

use crate::archive::FileStore;
use crate::error::Result;
use crate::options::{Field, OptionValue, RequestOptions};

/// One of the five file-like payload slots.
///
/// Each content field owns a (path, raw, final) triple of option slots;
/// see [`ContentField::path_field`], [`ContentField::raw_field`], and
/// [`ContentField::final_field`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContentField {
    /// Versioned code archive (`code.zip`).
    Code,
    /// JavaScript environment config (`config.js`).
    Config,
    /// Opaque file archive (`file.zip`).
    File,
    /// JSON config (`config.json`).
    Json,
    /// Shared module archive (`module.zip`).
    Module,
}

impl ContentField {
    /// All five content fields, in canonical order.
    pub const ALL: [ContentField; 5] = [
        ContentField::Code,
        ContentField::Config,
        ContentField::File,
        ContentField::Json,
        ContentField::Module,
    ];

    /// The caller-facing name of this content field.
    pub fn key(&self) -> &'static str {
        self.final_field().key()
    }

    /// The option slot carrying a filesystem path.
    pub fn path_field(&self) -> Field {
        match self {
            ContentField::Code => Field::CodePath,
            ContentField::Config => Field::ConfigPath,
            ContentField::File => Field::FilePath,
            ContentField::Json => Field::JsonPath,
            ContentField::Module => Field::ModulePath,
        }
    }

    /// The option slot carrying a raw buffer or string.
    pub fn raw_field(&self) -> Field {
        match self {
            ContentField::Code => Field::CodeBuf,
            ContentField::Config => Field::ConfigStr,
            ContentField::File => Field::FileBuf,
            ContentField::Json => Field::JsonStr,
            ContentField::Module => Field::ModuleBuf,
        }
    }

    /// The option slot carrying the final payload bytes.
    pub fn final_field(&self) -> Field {
        match self {
            ContentField::Code => Field::Code,
            ContentField::Config => Field::Config,
            ContentField::File => Field::File,
            ContentField::Json => Field::Json,
            ContentField::Module => Field::Module,
        }
    }

    /// Maps a registry required field to its content field, if it is one
    /// of the five path slots.
    ///
    /// The endpoint registry names content requirements by their path slot
    /// (`codePath`, `configPath`, ...); this is how the resolver recognizes
    /// them.
    pub fn from_required(field: Field) -> Option<ContentField> {
        match field {
            Field::CodePath => Some(ContentField::Code),
            Field::ConfigPath => Some(ContentField::Config),
            Field::FilePath => Some(ContentField::File),
            Field::JsonPath => Some(ContentField::Json),
            Field::ModulePath => Some(ContentField::Module),
            _ => None,
        }
    }
}

impl std::fmt::Display for ContentField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Expands a leading `~` to the process's home directory.
///
/// Paths without a leading `~`, and processes without a resolvable home
/// directory, pass through unchanged.
pub fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix('~') {
        if let Some(dirs) = directories::UserDirs::new() {
            let rest = rest.trim_start_matches(['/', '\\']);
            return dirs.home_dir().join(rest);
        }
    }
    PathBuf::from(path)
}

/// Runs the fallback chain for one content field, promoting whichever
/// representation is present into the final slot.
///
/// Returns `Ok(true)` if the final slot carries a value afterwards and
/// `Ok(false)` if no representation was supplied at all. Whether an empty
/// outcome is fatal depends on the caller: interactive resolution treats a
/// required-but-empty content field as
/// [`Error::MissingContent`](crate::Error::MissingContent), while
/// non-interactive calls let the server validate.
///
/// # Errors
///
/// Propagates [`FileStore`] failures when a path was supplied but could
/// not be read or archived.
pub fn resolve(
    options: &mut RequestOptions,
    content: ContentField,
    files: &dyn FileStore,
) -> Result<bool> {
    // (a) already final: idempotent fast path
    if options.contains(content.final_field()) {
        return Ok(true);
    }

    // (b) raw buffer/string present: promote
    if let Some(raw) = options.field(content.raw_field()).cloned() {
        let bytes = match raw {
            OptionValue::Bytes(b) => b,
            other => other.to_text().into_bytes(),
        };
        options.set_field(content.final_field(), bytes);
        return Ok(true);
    }

    // (c) path present: read through the collaborator, then promote twice
    if let Some(path) = options
        .field(content.path_field())
        .and_then(|v| v.as_str())
        .map(expand_home)
    {
        let bytes = read_path(&path, files)?;
        options.set_field(content.raw_field(), bytes.clone());
        options.set_field(content.final_field(), bytes);
        return Ok(true);
    }

    Ok(false)
}

/// Directories are recursively archived; plain files are read as text.
fn read_path(path: &Path, files: &dyn FileStore) -> Result<Vec<u8>> {
    if files.is_dir(path) {
        files.zip_directory(path)
    } else {
        files.read_file(path)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::archive::{ArchiveCodec, LocalFiles, ZipCodec};

    fn resolved(options: &RequestOptions, content: ContentField) -> Option<Vec<u8>> {
        options
            .field(content.final_field())
            .and_then(|v| v.as_bytes())
            .map(|b| b.to_vec())
    }

    #[test]
    fn test_final_value_wins() {
        let mut opts = RequestOptions::new()
            .with("config", b"final".to_vec())
            .with("configStr", "raw");
        let got = resolve(&mut opts, ContentField::Config, &LocalFiles).unwrap();
        assert!(got);
        assert_eq!(resolved(&opts, ContentField::Config).unwrap(), b"final");
    }

    #[test]
    fn test_raw_string_promoted_to_bytes() {
        let mut opts = RequestOptions::new().with("configStr", "window.cfg = {};");
        resolve(&mut opts, ContentField::Config, &LocalFiles).unwrap();
        assert_eq!(
            resolved(&opts, ContentField::Config).unwrap(),
            b"window.cfg = {};"
        );
    }

    #[test]
    fn test_path_and_raw_agree() {
        // Identical bytes whether supplied as a raw buffer or as a path to
        // an identical file.
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{\"a\":1}").unwrap();

        let mut by_path =
            RequestOptions::new().with("jsonPath", file.path().to_str().unwrap());
        resolve(&mut by_path, ContentField::Json, &LocalFiles).unwrap();

        let mut by_raw = RequestOptions::new().with("jsonStr", "{\"a\":1}");
        resolve(&mut by_raw, ContentField::Json, &LocalFiles).unwrap();

        assert_eq!(
            resolved(&by_path, ContentField::Json),
            resolved(&by_raw, ContentField::Json)
        );
    }

    #[test]
    fn test_directory_path_is_archived() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("main.js"), b"console.log(1);").unwrap();

        let mut opts =
            RequestOptions::new().with("codePath", dir.path().to_str().unwrap());
        resolve(&mut opts, ContentField::Code, &LocalFiles).unwrap();

        let archive = resolved(&opts, ContentField::Code).unwrap();
        let entries = ZipCodec.decompress(&archive).unwrap();
        assert!(entries.iter().any(|e| e.name.ends_with("main.js")));
    }

    #[test]
    fn test_tilde_expands_to_home_directory() {
        let home = directories::UserDirs::new()
            .expect("home directory resolvable in tests")
            .home_dir()
            .to_path_buf();
        assert_eq!(expand_home("~/uploads/code"), home.join("uploads/code"));
        assert_eq!(expand_home("~"), home);
    }

    #[test]
    fn test_plain_paths_pass_through_unchanged() {
        assert_eq!(expand_home("/tmp/code.zip"), PathBuf::from("/tmp/code.zip"));
        assert_eq!(expand_home("relative/config.js"), PathBuf::from("relative/config.js"));
    }

    #[test]
    fn test_missing_everything_is_not_fatal_here() {
        let mut opts = RequestOptions::new();
        let got = resolve(&mut opts, ContentField::Module, &LocalFiles).unwrap();
        assert!(!got);
        assert!(!opts.contains(Field::Module));
    }

    #[test]
    fn test_unreadable_path_propagates() {
        let mut opts = RequestOptions::new().with("jsonPath", "/no/such/file.json");
        assert!(resolve(&mut opts, ContentField::Json, &LocalFiles).is_err());
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let mut opts = RequestOptions::new().with("moduleBuf", b"zipbytes".to_vec());
        resolve(&mut opts, ContentField::Module, &LocalFiles).unwrap();
        let first = resolved(&opts, ContentField::Module);
        resolve(&mut opts, ContentField::Module, &LocalFiles).unwrap();
        assert_eq!(first, resolved(&opts, ContentField::Module));
    }
}
