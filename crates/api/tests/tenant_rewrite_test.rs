use axum::{
    body::Body,
    extract::{Path, RawQuery},
    http::{Request, StatusCode},
    middleware::from_fn,
    routing::get,
    Router,
};
use pretty_assertions::assert_eq;
use specialistly_api::middleware::tenant_rewrite::rewrite_tenant_request;
use tower::ServiceExt;

/// Builds a router with echo handlers so tests can observe exactly which
/// path a request was routed to after the rewrite layer ran.
fn echo_router() -> Router {
    Router::new()
        .route("/", get(|| async { "root" }))
        .route("/pricing", get(|| async { "pricing" }))
        .route("/dashboard", get(|| async { "dashboard" }))
        .route("/api/ping", get(|| async { "api" }))
        .route(
            "/specialist/:tenant",
            get(|Path(tenant): Path<String>| async move { format!("tenant:{}", tenant) }),
        )
        .route(
            "/specialist/:tenant/services",
            get(
                |Path(tenant): Path<String>, RawQuery(query): RawQuery| async move {
                    format!("services:{}:{}", tenant, query.unwrap_or_default())
                },
            ),
        )
        .layer(from_fn(rewrite_tenant_request))
}

async fn send(app: Router, host: Option<&str>, uri: &str) -> (StatusCode, String) {
    let mut builder = Request::builder().uri(uri);
    if let Some(host) = host {
        builder = builder.header("host", host);
    }
    let request = builder.body(Body::empty()).unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn test_subdomain_root_is_rewritten_to_tenant_page() {
    let (status, body) = send(echo_router(), Some("acme.specialistly.com"), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "tenant:acme");
}

#[tokio::test]
async fn test_subdomain_path_and_query_are_preserved() {
    let (status, body) = send(
        echo_router(),
        Some("acme.specialistly.com"),
        "/services?page=2",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "services:acme:page=2");
}

#[tokio::test]
async fn test_reserved_subdomain_passes_through() {
    let (status, body) = send(echo_router(), Some("www.specialistly.com"), "/pricing").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "pricing");
}

#[tokio::test]
async fn test_localhost_with_port_passes_through() {
    let (status, body) = send(echo_router(), Some("localhost:3000"), "/dashboard").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "dashboard");
}

#[tokio::test]
async fn test_apex_domain_passes_through() {
    let (status, body) = send(echo_router(), Some("specialistly.com"), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "root");
}

#[tokio::test]
async fn test_missing_host_passes_through() {
    let (status, body) = send(echo_router(), None, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "root");
}

#[tokio::test]
async fn test_api_path_bypasses_rewrite_even_on_subdomain() {
    let (status, body) = send(echo_router(), Some("acme.specialistly.com"), "/api/ping").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "api");
}

#[tokio::test]
async fn test_rewrite_does_not_redirect() {
    // A rewrite serves the tenant page directly; the client never sees a 3xx
    let (status, _) = send(echo_router(), Some("acme.specialistly.com"), "/").await;
    assert_ne!(status, StatusCode::MOVED_PERMANENTLY);
    assert_ne!(status, StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(status, StatusCode::OK);
}
