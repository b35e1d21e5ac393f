/// Appointment slot handlers: create, list, book, reset
pub mod slot;
/// Specialist profile handlers
pub mod specialist;
/// Tenant landing page handler (rewrite target)
pub mod tenant;
