//! Common test utilities for schemaflat
//!
//! Fixture loading, source generators and output assertions shared by the
//! integration tests.

#![allow(dead_code)]

mod assertions;
mod fixtures;

pub use assertions::*;
pub use fixtures::*;
