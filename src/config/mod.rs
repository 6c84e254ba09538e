//
//  fcp-client
//  config/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/20.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # Client Configuration
//!
//! Deployment environments, credentials, and hostname validation. The
//! platform runs six deployments, each with a platform URL and a gateway
//! URL; [`Environment`] carries both and parses from the conventional
//! short names (`dev`, `qa`, `qa2`, `stg`, `prod`, `local`) as well as
//! their historical numeric indexes (`0`–`5`).
//!
//! Credential *persistence* (env files, keychains) is deliberately out of
//! scope for this crate; callers supply a username and password and keep
//! them wherever they like.

use std::fmt;
use std::str::FromStr;

use url::Url;

use crate::error::{Error, Result};

/// One of the six platform deployments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Environment {
    /// Development deployment.
    Dev,
    /// First QA deployment.
    Qa,
    /// Second QA deployment.
    Qa2,
    /// Staging deployment.
    Stg,
    /// Production deployment.
    Prod,
    /// A local server on port 3001.
    Local,
}

impl Environment {
    /// All environments, in their historical index order (`dev` is `0`).
    pub const ALL: [Environment; 6] = [
        Environment::Dev,
        Environment::Qa,
        Environment::Qa2,
        Environment::Stg,
        Environment::Prod,
        Environment::Local,
    ];

    /// The conventional short name.
    pub fn short_name(&self) -> &'static str {
        match self {
            Environment::Dev => "dev",
            Environment::Qa => "qa",
            Environment::Qa2 => "qa2",
            Environment::Stg => "stg",
            Environment::Prod => "prod",
            Environment::Local => "local",
        }
    }

    /// The base URL of the publishing platform for this environment.
    pub fn platform_url(&self) -> &'static str {
        match self {
            Environment::Dev => "https://dev-fcp.foresee.com",
            Environment::Qa => "https://qa-fcp.foresee.com",
            Environment::Qa2 => "https://qa2-fcp.foresee.com",
            Environment::Stg => "https://stg-fcp.foresee.com",
            Environment::Prod => "https://fcp.foresee.com",
            Environment::Local => "http://localhost:3001",
        }
    }

    /// The base URL of the delivery gateway for this environment.
    pub fn gateway_url(&self) -> &'static str {
        match self {
            Environment::Dev => "https://dev-gateway.foresee.com",
            Environment::Qa => "https://qa-gateway.foresee.com",
            Environment::Qa2 => "https://qa2-gateway.foresee.com",
            Environment::Stg => "https://stg-gateway.foresee.com",
            Environment::Prod => "https://gateway.foresee.com",
            Environment::Local => "http://localhost:3001",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

impl FromStr for Environment {
    type Err = Error;

    /// Parses a short name or a historical numeric index (`0` = dev ...
    /// `5` = local).
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "dev" | "0" => Ok(Environment::Dev),
            "qa" | "1" => Ok(Environment::Qa),
            "qa2" | "2" => Ok(Environment::Qa2),
            "stg" | "3" => Ok(Environment::Stg),
            "prod" | "4" => Ok(Environment::Prod),
            "local" | "5" => Ok(Environment::Local),
            other => Err(Error::Config(format!("invalid environment: {other}"))),
        }
    }
}

/// Username and password for HTTP Basic authentication.
#[derive(Debug, Clone)]
pub struct Credentials {
    /// The account username.
    pub username: String,
    /// The account password.
    pub password: String,
}

impl Credentials {
    /// Creates credentials, rejecting empty values.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Result<Self> {
        let username = username.into();
        let password = password.into();
        if username.is_empty() {
            return Err(Error::Config("missing username".to_string()));
        }
        if password.is_empty() {
            return Err(Error::Config("missing password".to_string()));
        }
        Ok(Self { username, password })
    }
}

/// Validates a platform hostname.
///
/// A hostname must carry a scheme (`https://bla.bla.com`) and no trailing
/// slashes; every endpoint URL is formed by appending `/<path>` to it.
pub fn validate_hostname(hostname: &str) -> Result<()> {
    if hostname.is_empty() {
        return Err(Error::Config("missing hostname".to_string()));
    }
    if hostname.ends_with('/') || Url::parse(hostname).is_err() {
        return Err(Error::Config(
            "hostname should look like https://bla.bla.com with no trailing slashes".to_string(),
        ));
    }
    Ok(())
}
