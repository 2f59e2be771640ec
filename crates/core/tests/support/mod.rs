//! Shared test helpers for `calldeck-core` integration tests.
//!
//! These helpers provide reusable fixtures and lightweight mocks so the
//! wizard tests can focus on behaviour instead of boilerplate.

pub mod fixtures;
pub mod gateways;
