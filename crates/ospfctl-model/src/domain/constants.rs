//! Well-known values of the classroom topology.
//!
//! The built-in [`crate::Topology`] is assembled from these; a config file may override every one of them.

/// Cost assigned to every interface on the preferred path.
pub const LOW_COST: u16 = 5;

/// Cost assigned to every interface on the alternate path.
pub const HIGH_COST: u16 = 50;

/// How long the operator is told to wait after `construct` before OSPF adjacencies are up.
pub const CONVERGENCE_HINT_SECS: u64 = 30;
