//! Port traits for the billing domain
//!
//! These traits are the seams between the billing core and whatever storage
//! the surrounding application provides. `infra_mem` ships in-memory
//! adapters; production wires the application's own database here.

use async_trait::async_trait;
use chrono::NaiveDate;
use core_kernel::{BillingPeriod, DomainPort, InvoiceId, PortError, RoomId};

use crate::invoice::Invoice;
use crate::meter::MeterReading;
use crate::room::{RateSettings, Room};

/// Read-only access to room records
#[async_trait]
pub trait RoomDirectory: DomainPort {
    /// Looks up a single room
    async fn get(&self, id: RoomId) -> Result<Option<Room>, PortError>;

    /// Returns every room currently marked occupied
    async fn occupied_rooms(&self) -> Result<Vec<Room>, PortError>;
}

/// Read-only access to the dormitory's billing settings
#[async_trait]
pub trait RateProvider: DomainPort {
    /// Returns the current rate settings
    async fn current(&self) -> Result<RateSettings, PortError>;
}

/// Append-only storage for meter readings
#[async_trait]
pub trait MeterReadingStore: DomainPort {
    /// Stores a new reading; readings are never mutated or deleted
    async fn insert(&self, reading: &MeterReading) -> Result<(), PortError>;

    /// Returns the most recent reading for a room, if any
    async fn latest_for(&self, room_id: RoomId) -> Result<Option<MeterReading>, PortError>;

    /// Returns up to `limit` readings for a room, most recent first.
    /// Each call yields a fresh, independent snapshot.
    async fn history_for(
        &self,
        room_id: RoomId,
        limit: usize,
    ) -> Result<Vec<MeterReading>, PortError>;
}

/// Storage for invoices
///
/// Implementations must enforce at most one invoice per
/// `(room_id, billing_period)`: `insert` returns `PortError::Conflict` when
/// the key is already taken, which the engine maps to `DuplicateInvoice`.
/// This turns a concurrent-generation race into a reported duplicate rather
/// than two invoices.
#[async_trait]
pub trait InvoiceStore: DomainPort {
    /// Persists a new invoice; `Conflict` on a `(room, period)` collision
    async fn insert(&self, invoice: &Invoice) -> Result<(), PortError>;

    /// Looks up an invoice by id
    async fn get(&self, id: InvoiceId) -> Result<Option<Invoice>, PortError>;

    /// Replaces a stored invoice; `NotFound` if it was never inserted
    async fn update(&self, invoice: &Invoice) -> Result<(), PortError>;

    /// Finds the invoice covering the given room and period, if any
    async fn find_for_period(
        &self,
        room_id: RoomId,
        period: BillingPeriod,
    ) -> Result<Option<Invoice>, PortError>;

    /// Returns the pending invoices whose due date is strictly before `cutoff`
    async fn pending_due_before(&self, cutoff: NaiveDate) -> Result<Vec<Invoice>, PortError>;
}
