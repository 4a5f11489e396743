use std::{convert::TryFrom, fmt};

use serde::{Deserialize, Serialize};

use crate::ModelError;

/// OSPF interface cost.
///
/// FRR accepts `ip ospf cost <1-65535>`, so zero and anything above `u16::MAX` are rejected
/// at construction and at deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Cost(u16);

impl Cost {
    /// Cost of an interface on the preferred path.
    pub const LOW: Cost = Cost(crate::LOW_COST);

    /// Cost of an interface on the alternate path.
    pub const HIGH: Cost = Cost(crate::HIGH_COST);

    /// Creates a cost, rejecting values outside `1..=65535`.
    pub fn new(value: u32) -> Result<Self, ModelError> {
        Self::try_from(value)
    }

    /// Raw metric value.
    #[inline]
    pub const fn get(&self) -> u16 {
        self.0
    }
}

impl TryFrom<u32> for Cost {
    type Error = ModelError;
    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match u16::try_from(value) {
            Ok(v) if v > 0 => Ok(Cost(v)),
            _ => Err(ModelError::InvalidCost(value)),
        }
    }
}

impl From<Cost> for u32 {
    fn from(c: Cost) -> Self {
        u32::from(c.0)
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
