//! The billing engine: meter deltas in, invoices out

use std::sync::Arc;

use chrono::Days;
use core_kernel::{BillingPeriod, InvoiceId, RoomId, Timezone};

use crate::error::BillingError;
use crate::invoice::{AmountOverrides, Invoice, UtilityCharge};
use crate::ports::{InvoiceStore, MeterReadingStore, RateProvider, RoomDirectory};

/// Days between an invoice's reference date and its due date
const PAYMENT_TERM_DAYS: u64 = 7;

/// Outcome of whole-portfolio invoice generation
///
/// Every occupied room lands in exactly one of the two lists.
#[derive(Debug)]
pub struct BatchOutcome {
    pub succeeded: Vec<Invoice>,
    pub failed: Vec<RoomFailure>,
}

/// A room whose invoice could not be generated during a batch run
#[derive(Debug)]
pub struct RoomFailure {
    pub room_id: RoomId,
    pub room_number: String,
    pub reason: BillingError,
}

/// Generates invoices from meter readings, rents, and utility rates
///
/// The engine holds no state of its own; all reads and writes go through
/// the injected ports, so it can run against the production database or the
/// in-memory adapters interchangeably.
#[derive(Clone)]
pub struct BillingEngine {
    rooms: Arc<dyn RoomDirectory>,
    rates: Arc<dyn RateProvider>,
    meters: Arc<dyn MeterReadingStore>,
    invoices: Arc<dyn InvoiceStore>,
    timezone: Timezone,
}

impl BillingEngine {
    /// Creates an engine over the given ports, in the default dorm timezone
    pub fn new(
        rooms: Arc<dyn RoomDirectory>,
        rates: Arc<dyn RateProvider>,
        meters: Arc<dyn MeterReadingStore>,
        invoices: Arc<dyn InvoiceStore>,
    ) -> Self {
        Self {
            rooms,
            rates,
            meters,
            invoices,
            timezone: Timezone::default(),
        }
    }

    /// Overrides the timezone used to resolve the current billing period
    pub fn with_timezone(mut self, timezone: Timezone) -> Self {
        self.timezone = timezone;
        self
    }

    /// Generates the invoice for one room
    ///
    /// `period` defaults to the current month in the dorm's timezone. The
    /// latest meter reading supplies the consumption; rates and rent are
    /// read fresh. Fails with `DuplicateInvoice` if the room already has an
    /// invoice for the period, including when a concurrent caller wins the
    /// insert race.
    pub async fn generate_invoice(
        &self,
        room_id: RoomId,
        period: Option<BillingPeriod>,
    ) -> Result<Invoice, BillingError> {
        let room = self
            .rooms
            .get(room_id)
            .await?
            .ok_or(BillingError::RoomNotFound(room_id))?;
        let tenant_id = room.tenant_id.ok_or(BillingError::TenantRequired(room_id))?;

        let reading = self
            .meters
            .latest_for(room_id)
            .await?
            .ok_or(BillingError::NoMeterData(room_id))?;

        let period = period.unwrap_or_else(|| BillingPeriod::current_in(&self.timezone));

        if self
            .invoices
            .find_for_period(room_id, period)
            .await?
            .is_some()
        {
            return Err(BillingError::DuplicateInvoice { room_id, period });
        }

        let settings = self.rates.current().await?;

        let water_units = reading.water_units();
        let electric_units = reading.electric_units();

        let water = UtilityCharge {
            units: water_units,
            amount: settings.water_rate.charge(water_units),
        };
        let electric = UtilityCharge {
            units: electric_units,
            amount: settings.electric_rate.charge(electric_units),
        };

        let due_date = period.reference_date() + Days::new(PAYMENT_TERM_DAYS);

        let invoice = Invoice::new(
            room_id,
            tenant_id,
            room.base_rent,
            water,
            electric,
            period,
            due_date,
        );

        match self.invoices.insert(&invoice).await {
            Ok(()) => {
                tracing::debug!(%room_id, %period, total = %invoice.total_amount, "invoice generated");
                Ok(invoice)
            }
            // A concurrent generation for the same (room, period) won the race
            Err(e) if e.is_conflict() => Err(BillingError::DuplicateInvoice { room_id, period }),
            Err(e) => Err(e.into()),
        }
    }

    /// Generates invoices for every occupied room
    ///
    /// Rooms are processed independently: a per-room failure is collected
    /// into the outcome and never aborts the rest of the batch. Only
    /// infrastructure-level port faults propagate as errors.
    pub async fn generate_for_all_occupied(
        &self,
        period: Option<BillingPeriod>,
    ) -> Result<BatchOutcome, BillingError> {
        let period = period.unwrap_or_else(|| BillingPeriod::current_in(&self.timezone));
        let rooms = self.rooms.occupied_rooms().await?;

        let mut outcome = BatchOutcome {
            succeeded: Vec::new(),
            failed: Vec::new(),
        };

        for room in rooms {
            match self.generate_invoice(room.id, Some(period)).await {
                Ok(invoice) => outcome.succeeded.push(invoice),
                Err(BillingError::Port(e)) => return Err(e.into()),
                Err(reason) => outcome.failed.push(RoomFailure {
                    room_id: room.id,
                    room_number: room.room_number,
                    reason,
                }),
            }
        }

        tracing::info!(
            %period,
            succeeded = outcome.succeeded.len(),
            failed = outcome.failed.len(),
            "batch invoice generation finished"
        );
        Ok(outcome)
    }

    /// Applies manual corrections to a stored invoice
    ///
    /// The total is always recomputed from the resulting line amounts;
    /// callers cannot set it directly.
    pub async fn apply_adjustments(
        &self,
        invoice_id: InvoiceId,
        overrides: AmountOverrides,
    ) -> Result<Invoice, BillingError> {
        let mut invoice = self
            .invoices
            .get(invoice_id)
            .await?
            .ok_or(BillingError::InvoiceNotFound(invoice_id))?;

        invoice.apply_overrides(overrides);
        self.invoices.update(&invoice).await?;
        Ok(invoice)
    }
}
