//! # Tenant Resolution
//!
//! Specialists are tenants identified by a unique subdomain: a request for
//! `acme.specialistly.com` is served the `acme` specialist's pages. The
//! resolver inspects the `Host` header and decides whether the request
//! should be rewritten to the tenant-scoped path `/specialist/{tenant}`.
//!
//! Resolution is a pure function of the request: no lookups, no state. The
//! tenant label is treated as an opaque string here; whether a specialist
//! with that subdomain exists is decided downstream by the handler that
//! serves the rewritten path.

use serde::{Deserialize, Serialize};

/// Subdomain labels that never resolve to a tenant.
pub const RESERVED_SUBDOMAINS: &[&str] = &[
    "www",
    "api",
    "admin",
    "mail",
    "ftp",
    "localhost",
    "specialistly",
];

/// Path prefixes that bypass tenant resolution entirely.
pub const EXCLUDED_PATH_PREFIXES: &[&str] = &["/api", "/assets", "/static"];

/// The favicon path also bypasses resolution.
pub const FAVICON_PATH: &str = "/favicon.ico";

/// Outcome of resolving a request against the tenant rules
///
/// `Rewrite` carries the tenant label and the full rewritten
/// path-and-query; the displayed host is never changed (server-side
/// rewrite, not a redirect).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TenantRoute {
    /// Serve the request unchanged
    PassThrough,
    /// Serve the request from the tenant-scoped path
    Rewrite {
        /// The resolved tenant label (first host label)
        tenant: String,
        /// Rewritten path including any preserved query string
        path_and_query: String,
    },
}

/// Returns true for paths that are matched before the resolver runs
/// (API routes, static assets, favicon).
pub fn is_excluded_path(path: &str) -> bool {
    if path == FAVICON_PATH {
        return true;
    }
    EXCLUDED_PATH_PREFIXES
        .iter()
        .any(|prefix| path == *prefix || path.starts_with(&format!("{}/", prefix)))
}

/// Extracts the candidate tenant label from a `Host` header value
///
/// Strips any `:port` suffix, then requires at least three dot-separated
/// labels (subdomain + domain + TLD). The first label is the candidate;
/// reserved labels are rejected.
///
/// # Example
///
/// ```
/// use specialistly_core::tenant::extract_tenant;
///
/// assert_eq!(extract_tenant("acme.specialistly.com"), Some("acme"));
/// assert_eq!(extract_tenant("www.specialistly.com"), None);
/// assert_eq!(extract_tenant("localhost:3000"), None);
/// ```
pub fn extract_tenant(host: &str) -> Option<&str> {
    // Port is not part of the hostname
    let hostname = host.split(':').next().unwrap_or("");

    let labels: Vec<&str> = hostname.split('.').collect();
    if labels.len() < 3 {
        return None;
    }

    let candidate = labels[0];
    if candidate.is_empty() || RESERVED_SUBDOMAINS.contains(&candidate) {
        return None;
    }

    Some(candidate)
}

/// Resolves a request to either a pass-through or a tenant rewrite
///
/// A missing `Host` header behaves as an empty host and passes through.
/// The rewritten path is `/specialist/{tenant}` with the remainder of the
/// original path appended (`/` contributes nothing) and the query string
/// preserved.
///
/// # Example
///
/// ```
/// use specialistly_core::tenant::{resolve, TenantRoute};
///
/// let route = resolve(Some("acme.specialistly.com"), "/", None);
/// assert_eq!(
///     route,
///     TenantRoute::Rewrite {
///         tenant: "acme".to_string(),
///         path_and_query: "/specialist/acme".to_string(),
///     }
/// );
/// ```
pub fn resolve(host: Option<&str>, path: &str, query: Option<&str>) -> TenantRoute {
    if is_excluded_path(path) {
        return TenantRoute::PassThrough;
    }

    let tenant = match host.and_then(extract_tenant) {
        Some(tenant) => tenant,
        None => return TenantRoute::PassThrough,
    };

    let mut rewritten = format!("/specialist/{}", tenant);
    if path != "/" {
        rewritten.push_str(path);
    }
    if let Some(query) = query {
        if !query.is_empty() {
            rewritten.push('?');
            rewritten.push_str(query);
        }
    }

    TenantRoute::Rewrite {
        tenant: tenant.to_string(),
        path_and_query: rewritten,
    }
}
