//! Derived statistics for ticket-queue simulation runs.
//!
//! Consumes the read-only outputs of `tqsim-core` and produces the
//! numbers a presentation layer displays:
//!
//! - [`SimulationResult`]: empirical utilization and time-averaged
//!   occupancy, computed exactly from the recorded step-function
//!   trajectory.
//! - [`Mm1Model`]: the closed-form M/M/1 steady-state metrics
//!   (rho, L, W, Wq) for comparison, with [`InstabilityWarning`] as the
//!   displayable outcome when the offered load is at or above capacity.
//!
//! ```rust,no_run
//! use tqsim_core::{Simulation, SimulationConfig};
//! use tqsim_metrics::{Mm1Model, SimulationResult};
//!
//! let config = SimulationConfig::default();
//! let model = Mm1Model::from_config(&config);
//!
//! let mut simulation = Simulation::from_config(config)?;
//! let report = simulation.run()?;
//! let result = SimulationResult::compute(&report, simulation.history());
//!
//! match model.metrics() {
//!     Ok(theory) => println!("rho = {:.2}, L = {:.2}", theory.rho, theory.l),
//!     Err(warning) => println!("{warning}"),
//! }
//! println!("empirical utilization: {:.2}", result.server_utilization);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod error;
pub mod statistics;
pub mod theory;

pub use error::InstabilityWarning;
pub use statistics::{occupancy_area, SimulationResult};
pub use theory::{Mm1Metrics, Mm1Model};
