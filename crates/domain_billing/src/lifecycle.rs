//! Id-based lifecycle operations over the invoice store
//!
//! The `Invoice` aggregate owns the transition rules; this service loads,
//! transitions, and persists. The overdue sweep here is what the external
//! daily scheduler invokes.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use core_kernel::{InvoiceId, Timezone};

use crate::error::BillingError;
use crate::invoice::Invoice;
use crate::ports::InvoiceStore;

/// Drives invoices through their payment lifecycle
#[derive(Clone)]
pub struct InvoiceLifecycle {
    invoices: Arc<dyn InvoiceStore>,
    timezone: Timezone,
}

impl InvoiceLifecycle {
    /// Creates a lifecycle service in the default dorm timezone
    pub fn new(invoices: Arc<dyn InvoiceStore>) -> Self {
        Self {
            invoices,
            timezone: Timezone::default(),
        }
    }

    /// Overrides the timezone used to interpret sweep timestamps
    pub fn with_timezone(mut self, timezone: Timezone) -> Self {
        self.timezone = timezone;
        self
    }

    /// Tenant submits (or resubmits) a payment proof image
    pub async fn submit_proof(
        &self,
        invoice_id: InvoiceId,
        image: impl Into<String> + Send,
    ) -> Result<Invoice, BillingError> {
        let mut invoice = self.load(invoice_id).await?;
        invoice.submit_proof(image)?;
        self.invoices.update(&invoice).await?;
        Ok(invoice)
    }

    /// Reviewer approves or rejects a submitted proof
    pub async fn review(
        &self,
        invoice_id: InvoiceId,
        approve: bool,
    ) -> Result<Invoice, BillingError> {
        let mut invoice = self.load(invoice_id).await?;
        if approve {
            invoice.approve()?;
        } else {
            invoice.reject()?;
        }
        self.invoices.update(&invoice).await?;
        Ok(invoice)
    }

    /// Reviewer records a manual/cash payment, bypassing verification
    pub async fn mark_paid_manually(&self, invoice_id: InvoiceId) -> Result<Invoice, BillingError> {
        let mut invoice = self.load(invoice_id).await?;
        invoice.record_manual_payment()?;
        self.invoices.update(&invoice).await?;
        Ok(invoice)
    }

    /// Moves every pending invoice past its due date to overdue
    ///
    /// Examines exactly the pending invoices with `due_date` before `now`
    /// (interpreted as a local date in the dorm's timezone) and returns how
    /// many were transitioned. Safe to call repeatedly: a second call in the
    /// same instant transitions zero additional invoices.
    pub async fn mark_overdue(&self, now: DateTime<Utc>) -> Result<u64, BillingError> {
        let today = self.timezone.to_local(now).date_naive();
        let due = self.invoices.pending_due_before(today).await?;

        let mut count = 0u64;
        for mut invoice in due {
            invoice.fall_overdue()?;
            self.invoices.update(&invoice).await?;
            count += 1;
        }

        if count > 0 {
            tracing::info!(count, "marked invoices as overdue");
        }
        Ok(count)
    }

    async fn load(&self, invoice_id: InvoiceId) -> Result<Invoice, BillingError> {
        self.invoices
            .get(invoice_id)
            .await?
            .ok_or(BillingError::InvoiceNotFound(invoice_id))
    }
}
