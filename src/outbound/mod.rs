//! Outbound adapters connecting the domain to infrastructure.

pub mod persistence;
