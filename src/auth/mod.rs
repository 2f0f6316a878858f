//! Password hashing and session identity.

pub mod password;
pub mod session;
