pub mod adaptors;
pub mod store;
