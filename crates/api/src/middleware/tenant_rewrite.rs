//! # Tenant Rewrite Middleware
//!
//! Applies the core tenant resolver to every incoming request. When the
//! `Host` header carries a non-reserved subdomain, the request URI is
//! rewritten to the tenant-scoped path `/specialist/{tenant}` before
//! routing; the response is served from there without a redirect, so the
//! displayed host never changes.
//!
//! Excluded paths (`/api/...`, static assets, favicon), hosts without a
//! subdomain, and reserved labels pass through untouched. A malformed or
//! missing `Host` header is never an error; it simply resolves to
//! pass-through.

use axum::{
    extract::Request,
    http::{header::HOST, uri::Uri},
    middleware::Next,
    response::Response,
};
use specialistly_core::tenant::{self, TenantRoute};
use tracing::debug;

pub async fn rewrite_tenant_request(mut req: Request, next: Next) -> Response {
    let route = {
        let host = req.headers().get(HOST).and_then(|value| value.to_str().ok());
        tenant::resolve(host, req.uri().path(), req.uri().query())
    };

    if let TenantRoute::Rewrite {
        tenant,
        path_and_query,
    } = route
    {
        // A tenant label that does not form a valid URI falls back to
        // pass-through; existence checks happen downstream anyway.
        if let Some(uri) = rebuild_uri(req.uri(), &path_and_query) {
            debug!("Rewriting request for tenant {}: -> {}", tenant, path_and_query);
            *req.uri_mut() = uri;
        }
    }

    next.run(req).await
}

fn rebuild_uri(original: &Uri, path_and_query: &str) -> Option<Uri> {
    let mut parts = original.clone().into_parts();
    parts.path_and_query = Some(path_and_query.parse().ok()?);
    Uri::from_parts(parts).ok()
}
