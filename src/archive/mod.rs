//
//  fcp-client
//  archive/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/20.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # Archive and Filesystem Collaborators
//!
//! The request engine never touches ZIP bytes or the filesystem directly;
//! it talks to two seams defined here:
//!
//! - [`ArchiveCodec`] — turns archive bytes into an ordered file list
//!   (CRC-checked) and builds archives from in-memory entries.
//! - [`FileStore`] — reads files and bundles directories into archive
//!   buffers during content resolution.
//!
//! The bundled implementations ([`ZipCodec`], [`LocalFiles`]) are the
//! defaults wired into [`FcpClient`](crate::FcpClient); tests and embedders
//! can substitute their own.

use std::io::{Cursor, Read, Write};
use std::path::Path;

use walkdir::WalkDir;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

use crate::error::{Error, Result};

/// One entry extracted from an archive.
///
/// Directory entries carry no buffer; entry order follows the archive's
/// own directory order.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedFile {
    /// True if this entry is a directory.
    pub folder: bool,
    /// The entry name as recorded in the archive.
    pub name: String,
    /// The entry bytes; `None` for directories.
    pub buffer: Option<Vec<u8>>,
}

/// Archive codec seam: decompression with CRC checking, and compression
/// of in-memory entries.
pub trait ArchiveCodec: Send + Sync {
    /// Extracts every entry of `bytes`, in archive directory order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Archive`] for malformed archives and CRC
    /// mismatches; a corrupted archive is never returned as a result.
    fn decompress(&self, bytes: &[u8]) -> Result<Vec<ExtractedFile>>;

    /// Builds an archive from `(name, bytes)` pairs.
    fn compress(&self, entries: &[(String, Vec<u8>)]) -> Result<Vec<u8>>;
}

/// Filesystem seam used by content resolution.
pub trait FileStore: Send + Sync {
    /// Reads a file's bytes.
    fn read_file(&self, path: &Path) -> Result<Vec<u8>>;

    /// Recursively bundles a directory tree into an in-memory archive.
    fn zip_directory(&self, path: &Path) -> Result<Vec<u8>>;

    /// Whether `path` names a directory. Drives the read-vs-archive
    /// decision in content resolution.
    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }
}

/// ZIP-backed [`ArchiveCodec`] built on the `zip` crate.
///
/// Entry reads are CRC-verified by the underlying crate; a mismatch
/// surfaces as [`Error::Archive`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ZipCodec;

impl ArchiveCodec for ZipCodec {
    fn decompress(&self, bytes: &[u8]) -> Result<Vec<ExtractedFile>> {
        let mut archive = ZipArchive::new(Cursor::new(bytes))
            .map_err(|e| Error::Archive(e.to_string()))?;

        let mut files = Vec::with_capacity(archive.len());
        for index in 0..archive.len() {
            let mut entry = archive
                .by_index(index)
                .map_err(|e| Error::Archive(e.to_string()))?;
            let name = entry.name().to_string();
            if entry.is_dir() {
                files.push(ExtractedFile {
                    folder: true,
                    name,
                    buffer: None,
                });
            } else {
                let mut buffer = Vec::with_capacity(entry.size() as usize);
                entry
                    .read_to_end(&mut buffer)
                    .map_err(|e| Error::Archive(format!("{name}: {e}")))?;
                files.push(ExtractedFile {
                    folder: false,
                    name,
                    buffer: Some(buffer),
                });
            }
        }
        Ok(files)
    }

    fn compress(&self, entries: &[(String, Vec<u8>)]) -> Result<Vec<u8>> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        let options =
            SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

        for (name, bytes) in entries {
            writer
                .start_file(name.clone(), options)
                .map_err(|e| Error::Archive(e.to_string()))?;
            writer
                .write_all(bytes)
                .map_err(|e| Error::Archive(e.to_string()))?;
        }

        let cursor = writer
            .finish()
            .map_err(|e| Error::Archive(e.to_string()))?;
        Ok(cursor.into_inner())
    }
}

/// [`FileStore`] backed by the local filesystem.
///
/// `zip_directory` walks the tree in sorted order so two runs over the
/// same tree produce identical archives.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFiles;

impl FileStore for LocalFiles {
    fn read_file(&self, path: &Path) -> Result<Vec<u8>> {
        Ok(std::fs::read(path)?)
    }

    fn zip_directory(&self, path: &Path) -> Result<Vec<u8>> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        let options =
            SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

        for entry in WalkDir::new(path).sort_by_file_name() {
            let entry = entry.map_err(|e| Error::Archive(e.to_string()))?;
            let relative = entry
                .path()
                .strip_prefix(path)
                .unwrap_or(entry.path());
            if relative.as_os_str().is_empty() {
                continue; // the root itself
            }
            let name = relative.to_string_lossy().replace('\\', "/");

            if entry.file_type().is_dir() {
                writer
                    .add_directory(format!("{name}/"), options)
                    .map_err(|e| Error::Archive(e.to_string()))?;
            } else {
                writer
                    .start_file(name, options)
                    .map_err(|e| Error::Archive(e.to_string()))?;
                let bytes = std::fs::read(entry.path())?;
                writer
                    .write_all(&bytes)
                    .map_err(|e| Error::Archive(e.to_string()))?;
            }
        }

        let cursor = writer
            .finish()
            .map_err(|e| Error::Archive(e.to_string()))?;
        Ok(cursor.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_entries_in_archive_order() {
        let archive = ZipCodec
            .compress(&[
                ("b.txt".to_string(), b"bee".to_vec()),
                ("a.txt".to_string(), b"ay".to_vec()),
            ])
            .unwrap();

        let files = ZipCodec.decompress(&archive).unwrap();
        assert_eq!(files.len(), 2);
        // Order follows the archive directory, not a sort.
        assert_eq!(files[0].name, "b.txt");
        assert_eq!(files[0].buffer.as_deref(), Some(b"bee".as_slice()));
        assert_eq!(files[1].name, "a.txt");
    }

    #[test]
    fn test_directory_entries_have_no_buffer() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("sub")).unwrap();
        std::fs::write(dir.path().join("sub/inner.txt"), b"x").unwrap();

        let archive = LocalFiles.zip_directory(dir.path()).unwrap();
        let files = ZipCodec.decompress(&archive).unwrap();

        let folder = files.iter().find(|f| f.folder).expect("folder entry");
        assert!(folder.buffer.is_none());
        assert!(folder.name.starts_with("sub"));

        let inner = files.iter().find(|f| !f.folder).expect("file entry");
        assert_eq!(inner.name, "sub/inner.txt");
        assert_eq!(inner.buffer.as_deref(), Some(b"x".as_slice()));
    }

    #[test]
    fn test_corrupt_archive_is_an_error() {
        let err = ZipCodec.decompress(b"definitely not a zip").unwrap_err();
        assert!(matches!(err, Error::Archive(_)));
    }

    #[test]
    fn test_truncated_archive_is_an_error() {
        let archive = ZipCodec
            .compress(&[("a.txt".to_string(), vec![0u8; 4096])])
            .unwrap();
        let truncated = &archive[..archive.len() / 2];
        assert!(ZipCodec.decompress(truncated).is_err());
    }
}
