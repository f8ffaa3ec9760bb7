//! lunar-core — packet model, link timing, compression, and configuration.
//! All other lunar crates depend on this one.

pub mod compress;
pub mod config;
pub mod link;
pub mod packet;

pub use config::{ConfigError, LunarConfig};
pub use link::{ConfigValidationError, SystemStats, TransmissionConfig, TransmissionRecord};
pub use packet::{Packet, PacketError, PacketStatus, PacketType};
