//! Common identifier types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier for a simulated customer, 1-based in generation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CustomerId(pub u64);

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "customer-{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_id_display() {
        assert_eq!(CustomerId(3).to_string(), "customer-3");
    }

    #[test]
    fn test_customer_id_ordering() {
        assert!(CustomerId(1) < CustomerId(2));
    }
}
