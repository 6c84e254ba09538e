//
//  fcp-client
//  lib.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/20.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # FCP Client Library
//!
//! An async client for the FCP content and configuration publishing
//! platform: the service that hosts deployable code packages, container
//! configs, modules, and product definitions behind a small REST surface.
//!
//! ## Overview
//!
//! The platform exposes every operation as an *(action, resource)* pair —
//! `create code`, `get site`, `list clients`, `set config` — and this
//! crate keeps that shape: one declarative endpoint registry describes the
//! URL template, HTTP method, required fields, and body encoding for each
//! pair, and [`FcpClient::call`] drives the full sequence from option
//! normalization through response classification.
//!
//! ## Features
//!
//! - **Declarative endpoints**: 26 endpoints in one registry; unknown
//!   pairs fail before any network I/O
//! - **Forgiving options**: camelCase and snake_case spellings of a field
//!   are the same field; values are stringified on the wire
//! - **Content chains**: code/config/file/json/module payloads resolve
//!   from a final buffer, a raw value, or a filesystem path (directories
//!   are zipped on the fly)
//! - **Guided input**: missing required fields are solicited through a
//!   pluggable [`input::InputProvider`] seam
//! - **Classified responses**: every reply lands in a [`CallOutcome`]
//!   variant — config, listing, status, entity, entity list, or extracted
//!   archive files
//!
//! ## Module Structure
//!
//! - [`api`]: the [`FcpClient`] orchestration and transport
//! - [`endpoint`]: the declarative endpoint registry
//! - [`options`]: field canonicalization and the option set
//! - [`input`]: the input-provider seam and terminal prompts
//! - [`request`]: URL templating, query allow-list, body encoding
//! - [`response`]: envelope classification and [`CallOutcome`]
//! - [`archive`]: ZIP extraction/creation and the file-store seam
//! - [`config`]: environments, credentials, hostname validation
//! - [`error`]: the crate-wide error type
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use fcp_client::{Action, Environment, FcpClient, RequestOptions};
//!
//! # async fn example() -> fcp_client::Result<()> {
//! let client = FcpClient::for_environment(Environment::Prod, "user@example.com", "secret")?;
//!
//! let opts = RequestOptions::new().with("sitekey", "acme");
//! match client.call(Action::Get, "site", &opts).await? {
//!     fcp_client::CallOutcome::Entity(site) => println!("{site}"),
//!     other => println!("unexpected shape: {other:?}"),
//! }
//! # Ok(())
//! # }
//! ```

/// The API client: orchestration, transport, and the call log.
pub mod api;

/// ZIP archive extraction and creation, plus the filesystem seam used by
/// content resolution.
pub mod archive;

/// Deployment environments, credentials, and hostname validation.
pub mod config;

/// The declarative endpoint registry mapping *(action, resource)* pairs
/// to URL templates, methods, and required fields.
pub mod endpoint;

/// The crate-wide error type and result alias.
pub mod error;

/// The input-provider seam for soliciting missing required fields, with a
/// terminal implementation and a no-op implementation.
pub mod input;

/// Field canonicalization, option values, and the per-call option set.
pub mod options;

/// Request construction: URL templating, the query-parameter allow-list,
/// and body encoding.
pub mod request;

/// Response decoding: envelope classification and archive routing.
pub mod response;

pub use api::FcpClient;
pub use config::Environment;
pub use endpoint::Action;
pub use error::{Error, Result};
pub use options::{OptionValue, RequestOptions};
pub use response::CallOutcome;

/// Crate version, derived from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
