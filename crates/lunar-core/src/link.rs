//! Link parameters and the timing model.
//!
//! For a packet of `n` compressed bytes:
//!   transmission_time = n * 8 / bandwidth_bps
//!   propagation_delay = distance_km * 1000 / c
//!   simulated wait    = (transmission_time + propagation_delay) * latency_scale_factor

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Speed of light in vacuum, m/s.
pub const SPEED_OF_LIGHT: f64 = 299_792_458.0;

/// Mean Earth–Moon distance, km.
pub const EARTH_MOON_KM: f64 = 384_400.0;

/// Process-wide link parameters. Replaced wholesale on update.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransmissionConfig {
    pub distance_km: f64,
    pub bandwidth_bps: i64,
    pub compression_enabled: bool,
    /// Multiplier applied to real link timing before sleeping.
    pub latency_scale_factor: f64,
}

impl Default for TransmissionConfig {
    fn default() -> Self {
        Self {
            distance_km: EARTH_MOON_KM,
            bandwidth_bps: 2048,
            compression_enabled: true,
            latency_scale_factor: 0.01,
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("bandwidth_bps must be positive, got {0}")]
    NonPositiveBandwidth(i64),
    #[error("distance_km must be a finite non-negative number, got {0}")]
    InvalidDistance(f64),
    #[error("latency_scale_factor must be a finite positive number, got {0}")]
    InvalidScaleFactor(f64),
    #[error("link timing overflows for this distance, bandwidth and scale factor")]
    TimingOverflow,
}

impl TransmissionConfig {
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.bandwidth_bps <= 0 {
            return Err(ConfigValidationError::NonPositiveBandwidth(self.bandwidth_bps));
        }
        if !self.distance_km.is_finite() || self.distance_km < 0.0 {
            return Err(ConfigValidationError::InvalidDistance(self.distance_km));
        }
        if !self.latency_scale_factor.is_finite() || self.latency_scale_factor <= 0.0 {
            return Err(ConfigValidationError::InvalidScaleFactor(self.latency_scale_factor));
        }
        let worst = self.transmission_time(u64::MAX) + self.propagation_delay();
        if !(worst * self.latency_scale_factor).is_finite() {
            return Err(ConfigValidationError::TimingOverflow);
        }
        Ok(())
    }

    /// Seconds to push `size` bytes at the configured bandwidth.
    pub fn transmission_time(&self, size: u64) -> f64 {
        size as f64 * 8.0 / self.bandwidth_bps as f64
    }

    /// One-way light-speed delay over the configured distance, in seconds.
    pub fn propagation_delay(&self) -> f64 {
        self.distance_km * 1000.0 / SPEED_OF_LIGHT
    }

    /// Wall-clock time the simulator sleeps for a packet of `size` bytes.
    /// Saturates at `Duration::MAX` if the timing does not fit.
    pub fn simulated_wait(&self, size: u64) -> Duration {
        let secs =
            (self.transmission_time(size) + self.propagation_delay()) * self.latency_scale_factor;
        Duration::try_from_secs_f64(secs).unwrap_or(Duration::MAX)
    }
}

/// One completed transmission. Append-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransmissionRecord {
    pub packet_id: String,
    /// Completion time, ms since UNIX epoch.
    #[serde(rename = "timestamp")]
    pub completed_at: u64,
    #[serde(rename = "transmission_time")]
    pub transmission_time_secs: f64,
    #[serde(rename = "delay")]
    pub propagation_delay_secs: f64,
    /// Bytes on the link (compressed size).
    pub size: u64,
}

/// Summary metrics derived from the queue and history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemStats {
    pub total_packets: usize,
    pub packets_transmitted: usize,
    pub packets_queued: usize,
    pub bandwidth_utilization: f64,
    pub average_compression_ratio: f64,
    pub transmission_efficiency: f64,
}
