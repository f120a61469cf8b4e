//! Arrival stream generation
//!
//! Customers arrive according to a Poisson-style process whose rate cycles
//! through the configured arrival slots: customer `i` draws its
//! inter-arrival time at rate `1 / slot_times[i % len]`. Records are
//! immutable once generated; the engine consumes them read-only.

use crate::config::SimulationConfig;
use crate::dists::Exponential;
use crate::error::{ConfigError, DomainError};
use crate::randomness::UniformSource;
use crate::time::SimTime;
use crate::types::CustomerId;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Fixed catalog of ride destinations for tagged arrivals.
pub const RIDE_CATALOG: [&str; 10] = [
    "Roller Coaster",
    "Giant Ferris Wheel",
    "Haunted House",
    "Water Slide",
    "Carousel",
    "Bumper Cars",
    "Sky Tower",
    "Spinning Teacups",
    "Merry-Go-Round",
    "Balloon Castle",
];

/// Label used when destination tagging is disabled.
pub const GENERIC_DESTINATION: &str = "Ride";

/// One generated customer arrival. Immutable after generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrivalRecord {
    /// 1-based customer identifier in generation order.
    pub customer: CustomerId,
    /// Absolute arrival time; non-decreasing across a generated sequence.
    pub arrival_time: SimTime,
    /// Interval since the previous arrival (or since time zero).
    pub inter_arrival: Duration,
    /// The arrival rate the draw was taken at.
    pub arrival_rate: f64,
    /// Ride the customer is buying a ticket for.
    pub destination: String,
}

/// Generates a bounded arrival sequence from per-slot mean times.
#[derive(Debug, Clone)]
pub struct ArrivalGenerator {
    slot_times: Vec<f64>,
    tag_destinations: bool,
}

impl ArrivalGenerator {
    /// Create a generator over the given slot times.
    ///
    /// Fails with [`ConfigError`] if the slot list is empty or any slot
    /// time is non-positive.
    pub fn new(slot_times: Vec<f64>, tag_destinations: bool) -> Result<Self, ConfigError> {
        if slot_times.is_empty() {
            return Err(ConfigError::NoArrivalSlots);
        }
        for (index, &value) in slot_times.iter().enumerate() {
            if !(value > 0.0) {
                return Err(ConfigError::NonPositiveSlotTime { index, value });
            }
        }
        Ok(Self {
            slot_times,
            tag_destinations,
        })
    }

    /// Create a generator from a run configuration.
    pub fn from_config(config: &SimulationConfig) -> Result<Self, ConfigError> {
        Self::new(config.slot_times.clone(), config.tag_destinations)
    }

    /// Generate `count` arrival records, consuming draws from `source`.
    ///
    /// Arrival times strictly increase almost surely; a zero-length draw
    /// (uniform draw of exactly 0) produces a tie but never inverts the
    /// generation order.
    pub fn generate(
        &self,
        count: usize,
        source: &mut dyn UniformSource,
    ) -> Result<Vec<ArrivalRecord>, DomainError> {
        let mut records = Vec::with_capacity(count);
        let mut current_time = SimTime::ZERO;

        for i in 0..count {
            let slot = self.slot_times[i % self.slot_times.len()];
            let dist = Exponential::new(1.0 / slot);
            let inter_arrival = dist.sample_interval(source)?;
            current_time = current_time + inter_arrival;

            let destination = if self.tag_destinations {
                pick_ride(source)?
            } else {
                GENERIC_DESTINATION.to_string()
            };

            let record = ArrivalRecord {
                customer: CustomerId(i as u64 + 1),
                arrival_time: current_time,
                inter_arrival,
                arrival_rate: dist.rate(),
                destination,
            };
            debug!(
                customer = %record.customer,
                arrival_time = %record.arrival_time,
                destination = %record.destination,
                "generated arrival"
            );
            records.push(record);
        }

        Ok(records)
    }
}

/// Pick a ride uniformly from the catalog, consuming one draw.
fn pick_ride(source: &mut dyn UniformSource) -> Result<String, DomainError> {
    let u = source.next_uniform();
    if !(0.0..1.0).contains(&u) {
        return Err(DomainError::UniformOutOfRange { draw: u });
    }
    let index = ((u * RIDE_CATALOG.len() as f64) as usize).min(RIDE_CATALOG.len() - 1);
    Ok(RIDE_CATALOG[index].to_string())
}
