//! Billing Domain - Meter-to-Invoice Engine and Payment Lifecycle
//!
//! This crate implements the billing core of the dormitory management system:
//!
//! - **Meter readings**: an append-only ledger of cumulative water and
//!   electricity readings per room, with reset-safe consumption math.
//! - **Invoice generation**: converting the latest meter reading, the room's
//!   base rent, and the current utility rates into a monthly invoice, with at
//!   most one invoice per room per billing period.
//! - **Payment lifecycle**: the state machine moving an invoice from
//!   `Pending` through proof verification to `Paid` (or `Rejected` /
//!   `Overdue`).
//!
//! # Reset protection
//!
//! Utility meters are cumulative counters. When a meter is physically
//! replaced its counter restarts near zero, which would make the naive
//! `current - previous` delta negative. The billing math treats a negative
//! delta as a replaced meter and bills the raw current reading instead.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_billing::{BillingEngine, MeterReadingLedger};
//!
//! let ledger = MeterReadingLedger::new(meter_store.clone());
//! ledger.record(room_id, 150, 2380).await?;
//!
//! let engine = BillingEngine::new(rooms, rates, meter_store, invoice_store);
//! let invoice = engine.generate_invoice(room_id, None).await?;
//! ```

pub mod engine;
pub mod error;
pub mod invoice;
pub mod lifecycle;
pub mod meter;
pub mod ports;
pub mod room;

pub use engine::{BatchOutcome, BillingEngine, RoomFailure};
pub use error::BillingError;
pub use invoice::{AmountOverrides, Invoice, InvoiceStatus, UtilityCharge};
pub use lifecycle::InvoiceLifecycle;
pub use meter::{MeterReading, MeterReadingLedger};
pub use ports::{InvoiceStore, MeterReadingStore, RateProvider, RoomDirectory};
pub use room::{RateSettings, Room, RoomStatus};
