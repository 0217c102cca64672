//! Billing test harness
//!
//! Wires a `BillingEngine`, `InvoiceLifecycle`, and `MeterReadingLedger` to
//! fresh in-memory adapters, so tests exercise the same code paths the
//! surrounding application does.

use std::sync::Arc;

use core_kernel::RoomId;
use domain_billing::{
    BillingEngine, InvoiceLifecycle, MeterReadingLedger, RateSettings, Room,
};
use infra_mem::{
    InMemoryInvoiceStore, InMemoryMeterReadingStore, InMemoryRateProvider, InMemoryRoomDirectory,
};

use crate::builders::TestRoomBuilder;

/// A fully wired billing core over in-memory storage
pub struct BillingHarness {
    pub rooms: Arc<InMemoryRoomDirectory>,
    pub rates: Arc<InMemoryRateProvider>,
    pub meters: Arc<InMemoryMeterReadingStore>,
    pub invoices: Arc<InMemoryInvoiceStore>,
    pub engine: BillingEngine,
    pub lifecycle: InvoiceLifecycle,
    pub ledger: MeterReadingLedger,
}

impl Default for BillingHarness {
    fn default() -> Self {
        Self::new()
    }
}

impl BillingHarness {
    /// Creates a harness with default rate settings and no rooms
    pub fn new() -> Self {
        Self::with_settings(RateSettings::default())
    }

    /// Creates a harness with the given rate settings
    pub fn with_settings(settings: RateSettings) -> Self {
        let rooms = Arc::new(InMemoryRoomDirectory::new());
        let rates = Arc::new(InMemoryRateProvider::new(settings));
        let meters = Arc::new(InMemoryMeterReadingStore::new());
        let invoices = Arc::new(InMemoryInvoiceStore::new());

        let engine = BillingEngine::new(
            rooms.clone(),
            rates.clone(),
            meters.clone(),
            invoices.clone(),
        );
        let lifecycle = InvoiceLifecycle::new(invoices.clone());
        let ledger = MeterReadingLedger::new(meters.clone());

        Self {
            rooms,
            rates,
            meters,
            invoices,
            engine,
            lifecycle,
            ledger,
        }
    }

    /// Seeds an occupied room with default rent and returns its id
    pub fn seed_room(&self, room_number: &str) -> RoomId {
        let room = TestRoomBuilder::new()
            .with_room_number(room_number)
            .build();
        let id = room.id;
        self.rooms.put(room);
        id
    }

    /// Seeds an arbitrary room record
    pub fn seed(&self, room: Room) -> RoomId {
        let id = room.id;
        self.rooms.put(room);
        id
    }
}
