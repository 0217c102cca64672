//! Billing domain errors

use core_kernel::{BillingPeriod, InvoiceId, PortError, RoomId};
use thiserror::Error;

use crate::invoice::InvoiceStatus;

/// Errors that can occur in the billing domain
///
/// All variants are recoverable and reported to the caller; none are fatal
/// to the process. Batch generation collects the per-room variants into
/// failure entries and propagates only `Port` faults.
#[derive(Debug, Error)]
pub enum BillingError {
    /// The referenced room does not exist
    #[error("Room not found: {0}")]
    RoomNotFound(RoomId),

    /// The room has no assigned tenant, so there is nobody to bill
    #[error("Room {0} has no assigned tenant")]
    TenantRequired(RoomId),

    /// No meter reading has ever been recorded for the room
    #[error("No meter data recorded for room {0}")]
    NoMeterData(RoomId),

    /// An invoice already exists for this room and billing period
    #[error("Invoice already exists for room {room_id} in period {period}")]
    DuplicateInvoice {
        room_id: RoomId,
        period: BillingPeriod,
    },

    /// The referenced invoice does not exist
    #[error("Invoice not found: {0}")]
    InvoiceNotFound(InvoiceId),

    /// The requested lifecycle transition is not permitted
    #[error("Invalid transition: cannot {action} an invoice in {from} status")]
    InvalidTransition {
        from: InvoiceStatus,
        action: &'static str,
    },

    /// A proof submission carried no image
    #[error("Payment proof image is missing or empty")]
    InvalidProof,

    /// An infrastructure-level fault from a backing store
    #[error("Port error: {0}")]
    Port(#[from] PortError),
}
