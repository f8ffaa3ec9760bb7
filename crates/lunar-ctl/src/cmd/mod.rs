//! CLI command modules.

pub mod config;
pub mod http;
pub mod packets;
pub mod stats;
