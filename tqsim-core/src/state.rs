//! Observable simulation state: live system state, history, event log

use crate::time::SimTime;
use crate::types::CustomerId;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;

/// The kind of a processed event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    Arrival,
    Departure,
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventKind::Arrival => write!(f, "Arrival"),
            EventKind::Departure => write!(f, "Departure"),
        }
    }
}

/// Live state of the single-server system.
///
/// Exactly one instance exists per run, mutated only by the engine while
/// it processes events. Invariant: `customers_in_system` always equals the
/// queue length plus one if the server is busy.
#[derive(Debug, Clone, Default)]
pub struct SystemState {
    queue: VecDeque<CustomerId>,
    customers_in_system: usize,
    server_busy: bool,
}

impl SystemState {
    /// Empty system: no one waiting, no one in service.
    pub fn new() -> Self {
        Self::default()
    }

    /// Customers waiting plus the one in service, if any.
    pub fn customers_in_system(&self) -> usize {
        self.customers_in_system
    }

    /// Number of customers waiting in the FIFO queue.
    pub fn queue_length(&self) -> usize {
        self.queue.len()
    }

    /// Whether the server is currently serving a customer.
    pub fn server_busy(&self) -> bool {
        self.server_busy
    }

    pub(crate) fn customer_arrived(&mut self) {
        self.customers_in_system += 1;
    }

    pub(crate) fn customer_departed(&mut self) {
        debug_assert!(
            self.customers_in_system > 0,
            "departure from an empty system"
        );
        self.customers_in_system -= 1;
    }

    pub(crate) fn enqueue(&mut self, customer: CustomerId) {
        self.queue.push_back(customer);
    }

    pub(crate) fn dequeue(&mut self) -> Option<CustomerId> {
        self.queue.pop_front()
    }

    pub(crate) fn set_server_busy(&mut self, busy: bool) {
        self.server_busy = busy;
    }

    /// Occupancy accounting must stay consistent after every transition.
    pub(crate) fn assert_consistent(&self) {
        debug_assert_eq!(
            self.customers_in_system,
            self.queue.len() + usize::from(self.server_busy),
            "occupancy diverged from queue length and server status"
        );
    }
}

/// Snapshot of the system after one processed event.
///
/// The engine records one sample per processed event plus an initial
/// sample at time zero. Samples are append-only and ordered by
/// non-decreasing time; together they form the piecewise-constant
/// occupancy trajectory the statistics layer integrates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistorySample {
    pub time: SimTime,
    pub queue_length: usize,
    pub customers_in_system: usize,
    pub server_busy: bool,
}

/// One processed event with its post-transition state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventLogEntry {
    /// 1-based position in processing order.
    pub sequence: usize,
    pub kind: EventKind,
    pub customer: CustomerId,
    pub time: SimTime,
    pub customers_in_system: usize,
    pub queue_length: usize,
    pub server_busy: bool,
}
