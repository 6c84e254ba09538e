//
//  fcp-client
//  error.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/20.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # Unified Error Type
//!
//! This module provides the single error enum used across the crate. It
//! implements the standard `Error` trait via `thiserror` for ergonomic
//! error handling.
//!
//! # Overview
//!
//! Errors fall into three groups:
//!
//! - **Pre-flight errors** raised before any I/O: [`Error::UnknownEndpoint`],
//!   [`Error::Config`], [`Error::MissingField`], [`Error::MissingContent`]
//!   and [`Error::Input`].
//! - **Transport errors** raised while talking to the platform:
//!   [`Error::Transport`] for network-level failures and [`Error::Server`]
//!   for non-success HTTP responses. Both are distinct variants so success
//!   and failure are distinguishable by type, never by inspecting the shape
//!   of a returned value.
//! - **Decode errors** raised while interpreting a response:
//!   [`Error::Decode`] for malformed JSON bodies and [`Error::Archive`] for
//!   corrupt (CRC-failing) archive payloads.
//!
//! # Example
//!
//! ```rust
//! use fcp_client::{Action, Error};
//!
//! fn report(err: Error) {
//!     match err {
//!         Error::UnknownEndpoint { action, resource } => {
//!             eprintln!("no such endpoint: {} {}", action, resource);
//!         }
//!         Error::Server { status, .. } => eprintln!("server said {}", status),
//!         other => eprintln!("{}", other),
//!     }
//! }
//! ```

use thiserror::Error;

use crate::endpoint::Action;
use crate::options::content::ContentField;
use crate::options::Field;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for all client operations.
///
/// # Variants
///
/// | Variant | Raised | Phase |
/// |---------|--------|-------|
/// | `UnknownEndpoint` | (action, resource) pair not in the registry | pre-I/O |
/// | `Config` | invalid constructor arguments (credentials, hostname) | pre-I/O |
/// | `MissingField` | required non-content field absent after resolution | pre-I/O |
/// | `MissingContent` | content field unresolvable from any fallback | pre-I/O |
/// | `Input` | the input provider failed while gathering fields | pre-I/O |
/// | `Io` | local file access failed during content resolution | pre-I/O |
/// | `Transport` | network-level failure (DNS, connect, TLS, timeout) | I/O |
/// | `Server` | the platform answered with a non-2xx status | I/O |
/// | `Decode` | a 2xx response body was not valid JSON | post-I/O |
/// | `Archive` | archive extraction failed (CRC mismatch, bad entry) | post-I/O |
///
/// # Notes
///
/// - `Transport` automatically converts from `reqwest::Error`, and `Io`
///   from `std::io::Error`, so `?` works at both seams.
/// - There is no retry anywhere in the crate: every variant describes the
///   outcome of exactly one attempt.
#[derive(Error, Debug)]
pub enum Error {
    /// The (action, resource) pair is not present in the endpoint registry,
    /// even after retrying with a trailing `s` stripped from the resource.
    #[error("unknown choice combination: {action} {resource}")]
    UnknownEndpoint {
        /// The action that was requested.
        action: Action,
        /// The resource spelling as supplied by the caller.
        resource: String,
    },

    /// Client construction was handed invalid configuration.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// A required field was still absent after interactive resolution.
    #[error("missing required field: {}", .0.key())]
    MissingField(Field),

    /// A required content field produced no final value from any of its
    /// fallbacks (final value, raw buffer, readable path).
    #[error("missing {} content: no final value, raw buffer, or readable path was supplied", .0.key())]
    MissingContent(ContentField),

    /// The input provider failed while soliciting missing fields.
    #[error("input provider failed: {0}")]
    Input(#[source] anyhow::Error),

    /// Local file access failed while resolving a content field.
    #[error("file access failed: {0}")]
    Io(#[from] std::io::Error),

    /// A network-level failure occurred before a response was received.
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The platform answered with a non-success status code.
    #[error("server returned {status}: {body}")]
    Server {
        /// The HTTP status code of the response.
        status: reqwest::StatusCode,
        /// The raw response body, for diagnostics.
        body: String,
    },

    /// A successful response carried a body that could not be parsed.
    #[error("malformed response body: {0}")]
    Decode(String),

    /// Archive extraction failed; a corrupted archive cannot stand in for
    /// a usable result, so this is raised rather than returned.
    #[error("archive extraction failed: {0}")]
    Archive(String),
}
