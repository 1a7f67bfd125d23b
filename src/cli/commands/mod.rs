//! Command implementations

pub mod init;
pub mod redact;
pub mod reidentify;
pub mod status;
pub mod validate;
