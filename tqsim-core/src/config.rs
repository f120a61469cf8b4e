//! Run configuration and validation

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Number of arrivals generated per run unless overridden.
///
/// Kept independent of `num_events` for compatibility with the original
/// counter model: the arrival stream and the processing budget are
/// separate knobs.
pub const DEFAULT_ARRIVAL_COUNT: usize = 5;

/// Parameters for one simulation run.
///
/// All times are expressed in the caller's time unit (the ticket-counter
/// presentation uses minutes). A config is plain data; nothing runs until
/// it is handed to [`Simulation::new`](crate::engine::Simulation::new),
/// which validates it first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Mean inter-arrival time per slot; customers cycle through the slots.
    pub slot_times: Vec<f64>,
    /// Mean service time at the single counter.
    pub mean_service_time: f64,
    /// Maximum number of events to process.
    pub num_events: usize,
    /// Tag each arrival with a ride from the catalog instead of the
    /// generic label.
    pub tag_destinations: bool,
    /// Number of arrivals to generate, independent of `num_events`.
    pub arrival_count: usize,
    /// Seed for the uniform random source.
    pub seed: u64,
}

impl SimulationConfig {
    /// Create a config with the default arrival count, destination
    /// tagging enabled, and seed 0.
    pub fn new(slot_times: Vec<f64>, mean_service_time: f64, num_events: usize) -> Self {
        Self {
            slot_times,
            mean_service_time,
            num_events,
            tag_destinations: true,
            arrival_count: DEFAULT_ARRIVAL_COUNT,
            seed: 0,
        }
    }

    /// Set the random seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Enable or disable destination tagging.
    #[must_use]
    pub fn with_destination_tags(mut self, tag: bool) -> Self {
        self.tag_destinations = tag;
        self
    }

    /// Override the number of generated arrivals.
    #[must_use]
    pub fn with_arrival_count(mut self, count: usize) -> Self {
        self.arrival_count = count;
        self
    }

    /// Check every parameter the engine relies on.
    ///
    /// Called by the engine before a run starts; any error here means the
    /// simulation never begins.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.slot_times.is_empty() {
            return Err(ConfigError::NoArrivalSlots);
        }
        for (index, &value) in self.slot_times.iter().enumerate() {
            if !(value > 0.0) {
                return Err(ConfigError::NonPositiveSlotTime { index, value });
            }
        }
        if !(self.mean_service_time > 0.0) {
            return Err(ConfigError::NonPositiveServiceTime(self.mean_service_time));
        }
        Ok(())
    }

    /// Arithmetic mean of the per-slot arrival rates.
    ///
    /// This is the lambda the closed-form M/M/1 model uses: the mean of
    /// the configured rates, not an average over realized draws.
    pub fn mean_arrival_rate(&self) -> f64 {
        let sum: f64 = self.slot_times.iter().map(|t| 1.0 / t).sum();
        sum / self.slot_times.len() as f64
    }

    /// Service rate mu, `1 / mean_service_time`.
    pub fn service_rate(&self) -> f64 {
        1.0 / self.mean_service_time
    }
}

impl Default for SimulationConfig {
    /// The classic ticket-counter scenario: five arrival slots, a
    /// 15-unit mean service time, and a three-event budget.
    fn default() -> Self {
        Self::new(vec![10.0, 12.0, 8.0, 15.0, 20.0], 15.0, 3).with_seed(42)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = SimulationConfig::default();
        config.validate().unwrap();
        assert_eq!(config.arrival_count, DEFAULT_ARRIVAL_COUNT);
        assert_eq!(config.seed, 42);
        assert!(config.tag_destinations);
    }

    #[test]
    fn test_builder_methods() {
        let config = SimulationConfig::new(vec![5.0], 2.0, 10)
            .with_seed(7)
            .with_destination_tags(false)
            .with_arrival_count(8);

        assert_eq!(config.seed, 7);
        assert!(!config.tag_destinations);
        assert_eq!(config.arrival_count, 8);
    }

    #[test]
    fn test_empty_slot_list_is_rejected() {
        let config = SimulationConfig::new(vec![], 15.0, 3);
        assert_eq!(config.validate(), Err(ConfigError::NoArrivalSlots));
    }

    #[test]
    fn test_non_positive_slot_time_is_rejected() {
        let config = SimulationConfig::new(vec![10.0, 0.0, 8.0], 15.0, 3);
        assert_eq!(
            config.validate(),
            Err(ConfigError::NonPositiveSlotTime {
                index: 1,
                value: 0.0
            })
        );

        let config = SimulationConfig::new(vec![10.0, -2.5], 15.0, 3);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositiveSlotTime { index: 1, .. })
        ));
    }

    #[test]
    fn test_nan_slot_time_is_rejected() {
        let config = SimulationConfig::new(vec![f64::NAN], 15.0, 3);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositiveSlotTime { index: 0, .. })
        ));
    }

    #[test]
    fn test_non_positive_service_time_is_rejected() {
        let config = SimulationConfig::new(vec![10.0], 0.0, 3);
        assert_eq!(
            config.validate(),
            Err(ConfigError::NonPositiveServiceTime(0.0))
        );
    }

    #[test]
    fn test_mean_arrival_rate_is_mean_of_rates() {
        let config = SimulationConfig::new(vec![10.0, 20.0], 15.0, 3);
        // (1/10 + 1/20) / 2
        assert!((config.mean_arrival_rate() - 0.075).abs() < 1e-12);
    }

    #[test]
    fn test_service_rate() {
        let config = SimulationConfig::new(vec![10.0], 4.0, 3);
        assert_eq!(config.service_rate(), 0.25);
    }
}
