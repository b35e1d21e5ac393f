/// Health and version endpoints
pub mod health;
/// Slot management endpoints
pub mod slot;
/// Specialist profile endpoints
pub mod specialist;
/// Tenant landing endpoint
pub mod tenant;
