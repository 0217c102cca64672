//! In-memory invoice store
//!
//! Keeps a secondary `(room, period)` index so the uniqueness invariant is
//! enforced by the store itself, the way a database constraint would be.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::NaiveDate;
use core_kernel::{BillingPeriod, DomainPort, InvoiceId, PortError, RoomId};
use domain_billing::{Invoice, InvoiceStatus, InvoiceStore};

#[derive(Default)]
struct InvoiceTable {
    by_id: HashMap<InvoiceId, Invoice>,
    by_room_period: HashMap<(RoomId, BillingPeriod), InvoiceId>,
}

/// Invoice storage backed by in-process hash maps
#[derive(Default)]
pub struct InMemoryInvoiceStore {
    inner: RwLock<InvoiceTable>,
}

impl InMemoryInvoiceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored invoices
    pub fn len(&self) -> usize {
        self.inner.read().map(|t| t.by_id.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DomainPort for InMemoryInvoiceStore {}

#[async_trait]
impl InvoiceStore for InMemoryInvoiceStore {
    async fn insert(&self, invoice: &Invoice) -> Result<(), PortError> {
        let mut table = self
            .inner
            .write()
            .map_err(|_| PortError::internal("invoice store lock poisoned"))?;

        let key = (invoice.room_id, invoice.billing_period);
        if table.by_room_period.contains_key(&key) {
            return Err(PortError::conflict(format!(
                "invoice already exists for room {} in period {}",
                invoice.room_id, invoice.billing_period
            )));
        }
        if table.by_id.contains_key(&invoice.id) {
            return Err(PortError::conflict(format!(
                "invoice id {} already exists",
                invoice.id
            )));
        }

        table.by_room_period.insert(key, invoice.id);
        table.by_id.insert(invoice.id, invoice.clone());
        Ok(())
    }

    async fn get(&self, id: InvoiceId) -> Result<Option<Invoice>, PortError> {
        let table = self
            .inner
            .read()
            .map_err(|_| PortError::internal("invoice store lock poisoned"))?;
        Ok(table.by_id.get(&id).cloned())
    }

    async fn update(&self, invoice: &Invoice) -> Result<(), PortError> {
        let mut table = self
            .inner
            .write()
            .map_err(|_| PortError::internal("invoice store lock poisoned"))?;

        if !table.by_id.contains_key(&invoice.id) {
            return Err(PortError::not_found("Invoice", invoice.id));
        }
        table.by_id.insert(invoice.id, invoice.clone());
        Ok(())
    }

    async fn find_for_period(
        &self,
        room_id: RoomId,
        period: BillingPeriod,
    ) -> Result<Option<Invoice>, PortError> {
        let table = self
            .inner
            .read()
            .map_err(|_| PortError::internal("invoice store lock poisoned"))?;
        Ok(table
            .by_room_period
            .get(&(room_id, period))
            .and_then(|id| table.by_id.get(id))
            .cloned())
    }

    async fn pending_due_before(&self, cutoff: NaiveDate) -> Result<Vec<Invoice>, PortError> {
        let table = self
            .inner
            .read()
            .map_err(|_| PortError::internal("invoice store lock poisoned"))?;

        let mut due: Vec<Invoice> = table
            .by_id
            .values()
            .filter(|inv| inv.status == InvoiceStatus::Pending && inv.due_date < cutoff)
            .cloned()
            .collect();
        due.sort_by_key(|inv| inv.due_date);
        Ok(due)
    }
}
