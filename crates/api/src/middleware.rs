/// Error mapping from domain errors to HTTP responses
pub mod error_handling;
/// Subdomain-to-tenant request rewriting
pub mod tenant_rewrite;
