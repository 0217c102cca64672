//! Invoice aggregate and payment-lifecycle state machine

use chrono::{DateTime, NaiveDate, Utc};
use core_kernel::{BillingPeriod, InvoiceId, Money, RoomId, TenantId};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::BillingError;

/// Invoice payment status
///
/// `Pending` is the initial state set by the billing engine. `Paid` is
/// terminal in normal operation; no state is strictly terminal in the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InvoiceStatus {
    /// Awaiting payment
    Pending,
    /// Payment proof submitted, awaiting review
    Verifying,
    /// Payment confirmed
    Paid,
    /// Payment proof rejected by the reviewer
    Rejected,
    /// Past the due date without payment
    Overdue,
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            InvoiceStatus::Pending => "PENDING",
            InvoiceStatus::Verifying => "VERIFYING",
            InvoiceStatus::Paid => "PAID",
            InvoiceStatus::Rejected => "REJECTED",
            InvoiceStatus::Overdue => "OVERDUE",
        };
        write!(f, "{}", s)
    }
}

/// Consumed units and the amount charged for one utility
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct UtilityCharge {
    pub units: i64,
    pub amount: Money,
}

/// A monthly invoice for a room
///
/// Invariant: `total_amount` always equals `rent_amount + water_amount +
/// electric_amount`. It is recomputed on every mutation and never stored
/// independently.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    /// Unique identifier
    pub id: InvoiceId,
    /// Billed room
    pub room_id: RoomId,
    /// Billed tenant
    pub tenant_id: TenantId,
    /// Monthly base rent
    pub rent_amount: Money,
    /// Water units consumed
    pub water_units: i64,
    /// Water charge
    pub water_amount: Money,
    /// Electricity units consumed
    pub electric_units: i64,
    /// Electricity charge
    pub electric_amount: Money,
    /// Sum of rent, water and electric charges
    pub total_amount: Money,
    /// Calendar month this invoice covers
    pub billing_period: BillingPeriod,
    /// Payment due date
    pub due_date: NaiveDate,
    /// Payment status
    pub status: InvoiceStatus,
    /// When payment was confirmed
    pub paid_at: Option<DateTime<Utc>>,
    /// Payment proof image submitted by the tenant
    pub proof_image: Option<String>,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl Invoice {
    /// Creates a new pending invoice
    pub fn new(
        room_id: RoomId,
        tenant_id: TenantId,
        rent_amount: Money,
        water: UtilityCharge,
        electric: UtilityCharge,
        billing_period: BillingPeriod,
        due_date: NaiveDate,
    ) -> Self {
        let now = Utc::now();
        let mut invoice = Self {
            id: InvoiceId::new_v7(),
            room_id,
            tenant_id,
            rent_amount,
            water_units: water.units,
            water_amount: water.amount,
            electric_units: electric.units,
            electric_amount: electric.amount,
            total_amount: Money::zero(rent_amount.currency()),
            billing_period,
            due_date,
            status: InvoiceStatus::Pending,
            paid_at: None,
            proof_image: None,
            created_at: now,
            updated_at: now,
        };
        invoice.recalculate_total();
        invoice
    }

    /// Applies manual corrections and recomputes the total
    ///
    /// Unit counts and amounts may be overridden independently; the total is
    /// always the freshly computed sum and is never itself accepted.
    pub fn apply_overrides(&mut self, overrides: AmountOverrides) {
        if let Some(rent) = overrides.rent_amount {
            self.rent_amount = rent;
        }
        if let Some(units) = overrides.water_units {
            self.water_units = units;
        }
        if let Some(amount) = overrides.water_amount {
            self.water_amount = amount;
        }
        if let Some(units) = overrides.electric_units {
            self.electric_units = units;
        }
        if let Some(amount) = overrides.electric_amount {
            self.electric_amount = amount;
        }
        if let Some(due) = overrides.due_date {
            self.due_date = due;
        }
        self.recalculate_total();
        self.updated_at = Utc::now();
    }

    /// Tenant submits a payment proof image
    ///
    /// Allowed from `Pending`, `Overdue`, and `Rejected` (resubmission);
    /// moves the invoice to `Verifying` and stores or replaces the image.
    pub fn submit_proof(&mut self, image: impl Into<String>) -> Result<(), BillingError> {
        let image = image.into();
        if image.trim().is_empty() {
            return Err(BillingError::InvalidProof);
        }
        match self.status {
            InvoiceStatus::Pending | InvoiceStatus::Overdue | InvoiceStatus::Rejected => {
                self.proof_image = Some(image);
                self.status = InvoiceStatus::Verifying;
                self.updated_at = Utc::now();
                Ok(())
            }
            from => Err(BillingError::InvalidTransition {
                from,
                action: "submit proof on",
            }),
        }
    }

    /// Reviewer approves the submitted proof
    pub fn approve(&mut self) -> Result<(), BillingError> {
        match self.status {
            InvoiceStatus::Verifying => {
                self.status = InvoiceStatus::Paid;
                self.paid_at = Some(Utc::now());
                self.updated_at = Utc::now();
                Ok(())
            }
            from => Err(BillingError::InvalidTransition {
                from,
                action: "approve",
            }),
        }
    }

    /// Reviewer rejects the submitted proof
    ///
    /// The proof image is retained for audit; the tenant may resubmit.
    pub fn reject(&mut self) -> Result<(), BillingError> {
        match self.status {
            InvoiceStatus::Verifying => {
                self.status = InvoiceStatus::Rejected;
                self.updated_at = Utc::now();
                Ok(())
            }
            from => Err(BillingError::InvalidTransition {
                from,
                action: "reject",
            }),
        }
    }

    /// Reviewer records a manual/cash payment
    ///
    /// A distinct, explicitly permitted transition that bypasses
    /// `Verifying`; allowed while the invoice is unpaid.
    pub fn record_manual_payment(&mut self) -> Result<(), BillingError> {
        match self.status {
            InvoiceStatus::Pending | InvoiceStatus::Overdue | InvoiceStatus::Verifying => {
                self.status = InvoiceStatus::Paid;
                self.paid_at = Some(Utc::now());
                self.updated_at = Utc::now();
                Ok(())
            }
            from => Err(BillingError::InvalidTransition {
                from,
                action: "record a manual payment on",
            }),
        }
    }

    /// The overdue sweep found this invoice past its due date
    pub fn fall_overdue(&mut self) -> Result<(), BillingError> {
        match self.status {
            InvoiceStatus::Pending => {
                self.status = InvoiceStatus::Overdue;
                self.updated_at = Utc::now();
                Ok(())
            }
            from => Err(BillingError::InvalidTransition {
                from,
                action: "mark overdue",
            }),
        }
    }

    /// Recomputes `total_amount` from the line amounts
    fn recalculate_total(&mut self) {
        self.total_amount = self.rent_amount + self.water_amount + self.electric_amount;
    }
}

/// Optional replacement values for a manual invoice correction
///
/// `total_amount` is deliberately absent: it is always recomputed.
#[derive(Debug, Clone, Default)]
pub struct AmountOverrides {
    pub rent_amount: Option<Money>,
    pub water_units: Option<i64>,
    pub water_amount: Option<Money>,
    pub electric_units: Option<i64>,
    pub electric_amount: Option<Money>,
    pub due_date: Option<NaiveDate>,
}
