//! In-Memory Infrastructure Adapters
//!
//! Concrete implementations of the billing domain's port traits backed by
//! in-process hash maps. They serve two purposes:
//!
//! - the test fakes the domain's ports-and-adapters design calls for, and
//! - a working backend for embedded or demo deployments where the
//!   surrounding application has not wired its own database.
//!
//! `InMemoryInvoiceStore` enforces the one-invoice-per-`(room, period)`
//! constraint at the storage layer, so a concurrent-generation race
//! surfaces as `PortError::Conflict` rather than a second invoice.

pub mod repositories;

pub use repositories::{
    InMemoryInvoiceStore, InMemoryMeterReadingStore, InMemoryRateProvider, InMemoryRoomDirectory,
};
