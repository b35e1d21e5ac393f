/// Appointment slot model and booking lifecycle
pub mod slot;
/// Specialist (creator) profile model
pub mod specialist;
