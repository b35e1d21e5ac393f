//! # Specialistly Core
//!
//! Domain types and pure logic for the Specialistly marketplace backend.
//! This crate has no knowledge of HTTP or the database; it defines the
//! entities (appointment slots, specialist profiles), the slot booking
//! lifecycle, the subdomain tenant resolver, and the shared error taxonomy
//! used across the workspace.

/// Shared error types for the marketplace
pub mod errors;
/// Domain models: slots, specialists, and their request/response shapes
pub mod models;
/// Subdomain-based tenant resolution
pub mod tenant;
