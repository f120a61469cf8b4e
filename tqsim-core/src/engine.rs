//! Event-driven single-server queue engine
//!
//! The engine owns a pending-event queue and the live system state, and
//! advances simulated time by processing events in timestamp order. A run
//! is bounded by a number of processed events, not a time horizon: it
//! stops after `num_events` events or when the pending queue is empty,
//! whichever comes first.

use crate::arrivals::{ArrivalGenerator, ArrivalRecord};
use crate::config::SimulationConfig;
use crate::dists::Exponential;
use crate::error::{DomainError, SimError};
use crate::randomness::{SeededSource, UniformSource};
use crate::state::{EventKind, EventLogEntry, HistorySample, SystemState};
use crate::time::SimTime;
use crate::types::CustomerId;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::time::Duration;
use tracing::{debug, info, trace};

/// An event waiting in the pending queue.
///
/// Ordered by `(time, seq)`: `seq` is a monotonically increasing insertion
/// counter, so simultaneous events keep their insertion order. Relying on
/// the heap alone would make ties unstable.
#[derive(Debug)]
struct PendingEvent {
    time: SimTime,
    seq: u64,
    kind: EventKind,
    customer: CustomerId,
}

impl PartialEq for PendingEvent {
    fn eq(&self, other: &Self) -> bool {
        self.time == other.time && self.seq == other.seq
    }
}

impl Eq for PendingEvent {}

impl PartialOrd for PendingEvent {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PendingEvent {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for min-heap behavior in BinaryHeap; earlier times
        // first, then lower insertion sequence.
        other
            .time
            .cmp(&self.time)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Raw end-of-run snapshot.
///
/// Everything the statistics layer needs that is not already in the
/// history: the final clock, accumulated busy time, and the final state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    /// Timestamp of the last processed event (zero if none were).
    pub total_time: SimTime,
    /// Total time the server spent serving.
    pub server_busy_time: Duration,
    pub final_customers_in_system: usize,
    pub final_queue_length: usize,
    pub server_busy: bool,
}

/// A single simulation run of the ticket counter.
///
/// Construction generates the whole arrival stream and seeds the pending
/// queue; [`run`](Simulation::run) then processes events up to the
/// configured budget. An instance is single-shot: once its pending queue
/// is drained or its budget consumed it stays terminated, and a fresh run
/// needs a fresh instance.
pub struct Simulation {
    config: SimulationConfig,
    source: Box<dyn UniformSource>,
    service_dist: Exponential,
    pending: BinaryHeap<PendingEvent>,
    next_seq: u64,
    state: SystemState,
    clock: SimTime,
    server_busy_time: Duration,
    processed: usize,
    arrivals: Vec<ArrivalRecord>,
    history: Vec<HistorySample>,
    event_log: Vec<EventLogEntry>,
}

impl std::fmt::Debug for Simulation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Simulation")
            .field("config", &self.config)
            .field("next_seq", &self.next_seq)
            .field("clock", &self.clock)
            .field("server_busy_time", &self.server_busy_time)
            .field("processed", &self.processed)
            .finish_non_exhaustive()
    }
}

impl Simulation {
    /// Build a run from a validated config and an injected random source.
    ///
    /// Validates the config, generates the arrival stream, and seeds the
    /// pending queue with one arrival event per record. Any
    /// [`ConfigError`](crate::error::ConfigError) surfaces here, before
    /// anything runs.
    pub fn new(config: SimulationConfig, mut source: Box<dyn UniformSource>) -> Result<Self, SimError> {
        config.validate()?;

        let generator = ArrivalGenerator::from_config(&config)?;
        let arrivals = generator.generate(config.arrival_count, source.as_mut())?;
        let service_dist = Exponential::from_mean(config.mean_service_time);

        let mut pending = BinaryHeap::with_capacity(arrivals.len());
        let mut next_seq = 0;
        for record in &arrivals {
            pending.push(PendingEvent {
                time: record.arrival_time,
                seq: next_seq,
                kind: EventKind::Arrival,
                customer: record.customer,
            });
            next_seq += 1;
        }

        let state = SystemState::new();
        let history = vec![HistorySample {
            time: SimTime::ZERO,
            queue_length: 0,
            customers_in_system: 0,
            server_busy: false,
        }];

        info!(
            arrivals = arrivals.len(),
            num_events = config.num_events,
            "simulation initialized"
        );

        Ok(Self {
            config,
            source,
            service_dist,
            pending,
            next_seq,
            state,
            clock: SimTime::ZERO,
            server_busy_time: Duration::ZERO,
            processed: 0,
            arrivals,
            history,
            event_log: Vec::new(),
        })
    }

    /// Build a run driven by a [`SeededSource`] seeded from the config.
    pub fn from_config(config: SimulationConfig) -> Result<Self, SimError> {
        let source = Box::new(SeededSource::from_seed(config.seed));
        Self::new(config, source)
    }

    /// Process the single earliest pending event.
    ///
    /// Returns `Ok(false)` when no events remain. Does not consult the
    /// event budget; [`run`](Simulation::run) enforces that.
    pub fn step(&mut self) -> Result<bool, DomainError> {
        let Some(event) = self.pending.pop() else {
            return Ok(false);
        };

        // Busy time accrues over the interval being skipped, using the
        // server status that held during it.
        let elapsed = event.time.duration_since(self.clock);
        if self.state.server_busy() {
            self.server_busy_time += elapsed;
        }
        self.clock = event.time;

        match event.kind {
            EventKind::Arrival => {
                self.state.customer_arrived();
                if self.state.server_busy() {
                    self.state.enqueue(event.customer);
                } else {
                    self.state.set_server_busy(true);
                    self.schedule_departure(event.customer)?;
                }
            }
            EventKind::Departure => {
                self.state.customer_departed();
                if let Some(next) = self.state.dequeue() {
                    self.schedule_departure(next)?;
                } else {
                    self.state.set_server_busy(false);
                }
            }
        }
        self.state.assert_consistent();

        self.processed += 1;
        self.event_log.push(EventLogEntry {
            sequence: self.processed,
            kind: event.kind,
            customer: event.customer,
            time: self.clock,
            customers_in_system: self.state.customers_in_system(),
            queue_length: self.state.queue_length(),
            server_busy: self.state.server_busy(),
        });
        self.history.push(HistorySample {
            time: self.clock,
            queue_length: self.state.queue_length(),
            customers_in_system: self.state.customers_in_system(),
            server_busy: self.state.server_busy(),
        });

        trace!(
            kind = %event.kind,
            customer = %event.customer,
            time = %self.clock,
            in_system = self.state.customers_in_system(),
            queue_length = self.state.queue_length(),
            "processed event"
        );

        Ok(true)
    }

    /// Run until the event budget is spent or the pending queue drains.
    pub fn run(&mut self) -> Result<RunReport, DomainError> {
        info!(num_events = self.config.num_events, "simulation started");
        while self.processed < self.config.num_events {
            if !self.step()? {
                break;
            }
        }
        info!(
            processed = self.processed,
            final_time = %self.clock,
            "simulation completed"
        );
        Ok(self.report())
    }

    fn schedule_departure(&mut self, customer: CustomerId) -> Result<(), DomainError> {
        let service_time = self.service_dist.sample_interval(self.source.as_mut())?;
        let at = self.clock + service_time;
        self.pending.push(PendingEvent {
            time: at,
            seq: self.next_seq,
            kind: EventKind::Departure,
            customer,
        });
        self.next_seq += 1;
        debug!(customer = %customer, at = %at, "scheduled departure");
        Ok(())
    }

    /// The raw end-of-run snapshot.
    pub fn report(&self) -> RunReport {
        RunReport {
            total_time: self.clock,
            server_busy_time: self.server_busy_time,
            final_customers_in_system: self.state.customers_in_system(),
            final_queue_length: self.state.queue_length(),
            server_busy: self.state.server_busy(),
        }
    }

    /// The configuration this run was built from.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// The generated arrival stream, in generation order.
    pub fn arrivals(&self) -> &[ArrivalRecord] {
        &self.arrivals
    }

    /// Processed events with post-transition state, in processing order.
    pub fn event_log(&self) -> &[EventLogEntry] {
        &self.event_log
    }

    /// State samples: one at time zero plus one per processed event.
    pub fn history(&self) -> &[HistorySample] {
        &self.history
    }

    /// Live system state.
    pub fn state(&self) -> &SystemState {
        &self.state
    }

    /// Current simulation clock.
    pub fn clock(&self) -> SimTime {
        self.clock
    }

    /// Number of events processed so far.
    pub fn processed(&self) -> usize {
        self.processed
    }
}
