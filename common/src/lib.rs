//! Shared domain values for `macshift`.
//!
//! Everything in here is free of subprocess and terminal I/O so that both the
//! core orchestration crate and the CLI can depend on it.

pub mod config;
pub mod error;
pub mod network;
pub mod platform;
