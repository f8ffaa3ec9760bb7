//! lunar-services — packet queue, transmission simulation, and statistics.

pub mod packet_store;
pub mod simulator;
pub mod stats;

pub use packet_store::{PacketStore, HISTORY_WINDOW};
pub use simulator::{TransmissionError, TransmissionSimulator};
