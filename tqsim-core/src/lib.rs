//! Discrete-event engine for a single-server ticket queue.
//!
//! This crate simulates ticket purchases at a theme-park ride as an M/M/1
//! queue: exponentially distributed inter-arrival times, one server with
//! exponentially distributed service times, FIFO waiting. The engine is
//! the whole story here; it performs no I/O, no formatting, and no
//! rendering, and a presentation layer is expected to drive it and read
//! its outputs.
//!
//! # Architecture Overview
//!
//! - [`SimulationConfig`]: parameters for one run (arrival slots, service
//!   time, event budget, seed).
//! - [`Simulation`]: the engine. Construction generates the arrival
//!   stream and seeds the pending-event queue; [`Simulation::run`]
//!   processes events up to the budget.
//! - [`UniformSource`]: the injected randomness. Equal seeds give
//!   bit-identical runs; independent sources never interfere.
//!
//! After a run the engine exposes four read-only outputs: the
//! [`ArrivalRecord`] stream, the [`EventLogEntry`] log, the
//! [`HistorySample`] trajectory, and a raw [`RunReport`] snapshot. The
//! `tqsim-metrics` crate derives utilization and occupancy statistics
//! from them.
//!
//! # Basic Usage
//!
//! ```rust,no_run
//! use tqsim_core::{Simulation, SimulationConfig};
//!
//! let config = SimulationConfig::new(vec![10.0, 12.0, 8.0], 15.0, 3).with_seed(42);
//! let mut simulation = Simulation::from_config(config)?;
//! let report = simulation.run()?;
//!
//! println!("served for {:?}", report.server_busy_time);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod arrivals;
pub mod config;
pub mod dists;
pub mod engine;
pub mod error;
pub mod logging;
pub mod randomness;
pub mod state;
pub mod time;
pub mod types;

pub use arrivals::{ArrivalGenerator, ArrivalRecord, GENERIC_DESTINATION, RIDE_CATALOG};
pub use config::{SimulationConfig, DEFAULT_ARRIVAL_COUNT};
pub use dists::Exponential;
pub use engine::{RunReport, Simulation};
pub use error::{ConfigError, DomainError, SimError};
pub use logging::{init_logging, init_logging_with_level};
pub use randomness::{ReplaySource, SeededSource, UniformSource};
pub use state::{EventKind, EventLogEntry, HistorySample, SystemState};
pub use time::SimTime;
pub use types::CustomerId;
