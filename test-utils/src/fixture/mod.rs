//! Test fixtures providing in-memory entity models without database insertion.
//!
//! Used by unit tests of pure logic, such as booking transition decisions, that
//! only need a container snapshot.

pub mod container;
