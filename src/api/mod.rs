//
//  fcp-client
//  api/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/20.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # API Client Layer
//!
//! This module hosts the client that drives the whole engine:
//! [`FcpClient`] owns the transport, the collaborator seams (input
//! provider, file store, archive codec), and the per-call orchestration
//! from option normalization through response decoding.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use fcp_client::{Action, FcpClient, RequestOptions};
//!
//! # async fn example() -> fcp_client::Result<()> {
//! let client = FcpClient::new("user@example.com", "secret", "https://fcp.example.com")?;
//! let outcome = client
//!     .call(Action::Get, "site", &RequestOptions::new().with("sitekey", "acme"))
//!     .await?;
//! println!("{outcome:?}");
//! # Ok(())
//! # }
//! ```

/// Core client: orchestration, transport, and the call log.
pub mod client;

pub use client::FcpClient;
