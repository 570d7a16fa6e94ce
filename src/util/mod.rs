//! Shared utilities (hex string helpers).

pub mod hex;
