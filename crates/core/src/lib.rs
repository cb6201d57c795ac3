//! Fixed-asset lifecycle core.
//!
//! Domain records, the lifecycle state machine, the transfer and disposal
//! workflows, and the storage and reference-resolution traits they run
//! against. This crate does not depend on the database crate; callers inject
//! a [`store::LifecycleStore`] and a [`reference::ReferenceResolver`].

pub mod asset;
pub mod audit;
pub mod error;
pub mod ledger;
pub mod lifecycle;
pub mod reference;
pub mod registry;
pub mod store;
pub mod types;
pub mod workflow;

#[cfg(any(test, feature = "test-support"))]
pub mod memory;

#[cfg(test)]
mod test_fixtures;
