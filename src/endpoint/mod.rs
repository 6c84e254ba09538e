//
//  fcp-client
//  endpoint/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/20.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # Endpoint Registry
//!
//! The registry is the declarative heart of the engine: a static,
//! immutable table mapping an (action, resource) pair to everything needed
//! to build its request — HTTP method, URL template, required fields, and
//! whether the body is multipart.
//!
//! # Overview
//!
//! - [`Action`] — the four top-level verbs: create, get, list, set.
//! - [`EndpointDescriptor`] — one registry row.
//! - [`lookup`] — resolves a pair, accepting plural resource spellings by
//!   retrying with a trailing `s` stripped.
//! - [`valid_endpoints`] — enumerates every registered pair.
//!
//! URL templates use `:name` path placeholders (`sites/:site/containers/
//! :container/...`); substitution lives in [`crate::request`].
//!
//! # Example
//!
//! ```rust
//! use fcp_client::{Action, endpoint};
//!
//! let descriptor = endpoint::lookup(Action::Get, "sites").unwrap();
//! assert_eq!(descriptor.url_template, "sites/:site");
//! assert_eq!(descriptor.method, reqwest::Method::GET);
//! ```

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use reqwest::Method;

use crate::error::{Error, Result};
use crate::options::Field;

/// Top-level verb category in the endpoint registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Action {
    /// Create a new entity (POST).
    Create,
    /// Fetch a single entity or payload (GET).
    Get,
    /// List entities of a kind (GET).
    List,
    /// Flip server-side state on an existing entity (POST).
    Set,
}

impl Action {
    /// All four actions, in registry order.
    pub const ALL: [Action; 4] = [Action::Create, Action::Get, Action::List, Action::Set];

    /// The lowercase name used in errors and logs.
    pub fn name(&self) -> &'static str {
        match self {
            Action::Create => "create",
            Action::Get => "get",
            Action::List => "list",
            Action::Set => "set",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Action {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "create" => Ok(Action::Create),
            "get" => Ok(Action::Get),
            "list" => Ok(Action::List),
            "set" => Ok(Action::Set),
            other => Err(Error::Config(format!("unknown action: {other}"))),
        }
    }
}

/// One row of the endpoint registry.
///
/// Descriptors are static and immutable for the process lifetime; a call
/// only ever reads them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointDescriptor {
    /// The action this descriptor belongs to.
    pub action: Action,
    /// The singular resource key.
    pub resource: &'static str,
    /// HTTP method; the registry only uses GET and POST.
    pub method: Method,
    /// URL template with `:name` path placeholders.
    pub url_template: &'static str,
    /// Ordered required fields. Content requirements are named by their
    /// path slot (`codePath`, `configPath`, ...).
    pub required: &'static [Field],
    /// Whether the body is encoded as a multipart form.
    pub multipart: bool,
}

macro_rules! endpoint {
    ($action:expr, $resource:literal, $method:ident, $template:literal, [$($field:ident),*], $multipart:literal) => {
        (
            ($action, $resource),
            EndpointDescriptor {
                action: $action,
                resource: $resource,
                method: Method::$method,
                url_template: $template,
                required: &[$(Field::$field),*],
                multipart: $multipart,
            },
        )
    };
}

/// The static registry. Resources are keyed by their singular spelling;
/// [`lookup`] handles the plural fallback.
static REGISTRY: Lazy<HashMap<(Action, &'static str), EndpointDescriptor>> = Lazy::new(|| {
    use Action::*;
    HashMap::from([
        // create
        endpoint!(Create, "client", POST, "clients", [ClientId, Name, Metadata, Notes], false),
        endpoint!(Create, "code", POST, "code", [CodePath, Notes, Version], true),
        endpoint!(
            Create,
            "config",
            POST,
            "sites/:site/containers/:container/configs",
            [Site, Container, Notes, ConfigPath, VendorCode],
            true
        ),
        endpoint!(Create, "container", POST, "sites/:site/containers", [Site, Name, Notes], false),
        endpoint!(Create, "default", POST, "defaultconfig", [ConfigPath, VendorCode], true),
        endpoint!(Create, "module", POST, "modules", [ModulePath, ModuleName, Version, Notes], true),
        endpoint!(
            Create,
            "product",
            POST,
            "sites/:site/containers/:container/products/:product",
            [Site, Container, Product, Notes, ConfigPath, VendorCode],
            true
        ),
        endpoint!(Create, "site", POST, "sites", [ClientId, Name, Notes], false),
        // get
        endpoint!(Get, "client", GET, "clients/:clientId", [ClientId], false),
        endpoint!(Get, "code", GET, "code/files/:codeId", [CodeId], false),
        endpoint!(
            Get,
            "config",
            GET,
            "sites/:site/containers/:container/configs/files/:configTag",
            [Site, Container, ConfigTag],
            false
        ),
        endpoint!(Get, "container", GET, "sites/:site/containers/:container", [Site, Container], false),
        endpoint!(Get, "default", GET, "defaultconfig", [], false),
        endpoint!(Get, "module", GET, "modules/files/:moduleMD5", [ModuleMd5], false),
        endpoint!(Get, "site", GET, "sites/:site", [Site], false),
        // list
        endpoint!(List, "client", GET, "clients", [], false),
        endpoint!(List, "code", GET, "code", [], false),
        endpoint!(
            List,
            "config",
            GET,
            "sites/:site/containers/:container/configs",
            [Site, Container],
            false
        ),
        endpoint!(List, "container", GET, "sites/:site/containers", [Site], false),
        endpoint!(List, "module", GET, "modules", [], false),
        endpoint!(
            List,
            "product",
            GET,
            "sites/:site/containers/:container/products",
            [Site, Container],
            false
        ),
        endpoint!(List, "site", GET, "sites", [], false),
        // set
        endpoint!(Set, "code_invalid", POST, "code/:codeId/invalid", [CodeId], false),
        endpoint!(Set, "code_latest", POST, "code/:codeId/latest", [CodeId], false),
        endpoint!(
            Set,
            "config",
            POST,
            "sites/:site/containers/:container/configs/:configTag",
            [Site, Container, ConfigTag, Notes],
            false
        ),
        endpoint!(
            Set,
            "product",
            POST,
            "sites/:site/containers/:container/products/:product/:configTag",
            [Site, Container, Product, ConfigTag, Notes],
            false
        ),
    ])
});

/// Resolves an (action, resource) pair to its descriptor.
///
/// The exact resource key is tried first; if absent and the spelling ends
/// in `s`, the lookup retries with the trailing `s` stripped, so
/// `lookup(Get, "sites")` and `lookup(Get, "site")` resolve identically.
///
/// # Errors
///
/// Returns [`Error::UnknownEndpoint`] naming the unresolved pair. This
/// check always runs before any I/O.
pub fn lookup(action: Action, resource: &str) -> Result<&'static EndpointDescriptor> {
    let get = |res: &str| -> Option<&'static EndpointDescriptor> {
        Lazy::force(&REGISTRY)
            .iter()
            .find(|((a, r), _)| *a == action && *r == res)
            .map(|(_, descriptor)| descriptor)
    };
    if let Some(descriptor) = get(resource) {
        return Ok(descriptor);
    }
    if let Some(singular) = resource.strip_suffix('s') {
        if let Some(descriptor) = get(singular) {
            return Ok(descriptor);
        }
    }
    Err(Error::UnknownEndpoint {
        action,
        resource: resource.to_string(),
    })
}

/// Every registered (action, resource) pair, sorted for stable output.
pub fn valid_endpoints() -> Vec<(Action, &'static str)> {
    let mut pairs: Vec<_> = REGISTRY.keys().copied().collect();
    pairs.sort();
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_exact() {
        let descriptor = lookup(Action::Create, "code").unwrap();
        assert_eq!(descriptor.method, Method::POST);
        assert_eq!(descriptor.url_template, "code");
        assert!(descriptor.multipart);
        assert_eq!(
            descriptor.required,
            &[Field::CodePath, Field::Notes, Field::Version]
        );
    }

    #[test]
    fn test_lookup_plural_falls_back_to_singular() {
        let plural = lookup(Action::Get, "sites").unwrap();
        let singular = lookup(Action::Get, "site").unwrap();
        assert_eq!(plural, singular);

        assert_eq!(
            lookup(Action::List, "clients").unwrap(),
            lookup(Action::List, "client").unwrap()
        );
    }

    #[test]
    fn test_lookup_unknown_names_the_pair() {
        let err = lookup(Action::Set, "site").unwrap_err();
        match err {
            Error::UnknownEndpoint { action, resource } => {
                assert_eq!(action, Action::Set);
                assert_eq!(resource, "site");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_registry_is_complete() {
        let pairs = valid_endpoints();
        assert_eq!(pairs.len(), 26);
        assert!(pairs.contains(&(Action::Set, "code_invalid")));
        assert!(pairs.contains(&(Action::Get, "default")));
    }

    #[test]
    fn test_get_endpoints_carry_no_multipart() {
        for (action, resource) in valid_endpoints() {
            let descriptor = lookup(action, resource).unwrap();
            if descriptor.method == Method::GET {
                assert!(!descriptor.multipart, "{action} {resource}");
            }
        }
    }

    #[test]
    fn test_action_round_trip() {
        for action in Action::ALL {
            assert_eq!(action.name().parse::<Action>().unwrap(), action);
        }
        assert!("delete".parse::<Action>().is_err());
    }
}
