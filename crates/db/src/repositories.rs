pub mod slot;
pub mod specialist;
