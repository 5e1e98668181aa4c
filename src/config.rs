//! Link parameters for a simulation run.

use validator::Validate;

use crate::error::SimError;

pub const BITS_PER_MEGABIT: u64 = 1_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Validate)]
pub struct LinkConfig {
    /// Buffer capacity in packets.
    #[validate(range(min = 1))]
    pub buffer_capacity: usize,

    /// Link capacity in bits per second.
    #[validate(range(min = 1))]
    pub bandwidth_bps: u64,
}

impl LinkConfig {
    /// Builds and validates a configuration.
    pub fn new(buffer_capacity: usize, bandwidth_bps: u64) -> Result<Self, SimError> {
        let config = LinkConfig { buffer_capacity, bandwidth_bps };
        config.validate()?;
        Ok(config)
    }

    pub fn from_megabits(buffer_capacity: usize, bandwidth_mbps: u64) -> Result<Self, SimError> {
        LinkConfig::new(buffer_capacity, bandwidth_mbps.saturating_mul(BITS_PER_MEGABIT))
    }

    /// Seconds needed to put `size_bytes` on the link.
    pub fn transmission_delay(&self, size_bytes: u64) -> f64 {
        (size_bytes as f64 * 8.) / self.bandwidth_bps as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_capacity_and_bandwidth() {
        assert!(matches!(LinkConfig::new(0, 1), Err(SimError::InvalidConfig(_))));
        assert!(matches!(LinkConfig::new(1, 0), Err(SimError::InvalidConfig(_))));
        assert!(matches!(LinkConfig::from_megabits(4, 0), Err(SimError::InvalidConfig(_))));
    }

    #[test]
    fn converts_megabits() {
        let config = LinkConfig::from_megabits(10, 54).unwrap();
        assert_eq!(config.bandwidth_bps, 54_000_000);
        assert_eq!(config.buffer_capacity, 10);
    }

    #[test]
    fn transmission_delay_is_bits_over_bandwidth() {
        let config = LinkConfig::new(1, 8_000_000).unwrap();
        assert_eq!(config.transmission_delay(1_000_000), 1.0);
        assert_eq!(config.transmission_delay(500_000), 0.5);
    }
}
