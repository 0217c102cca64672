//! Tests for the invoice aggregate: totals, overrides, and the payment
//! lifecycle state machine.

use chrono::NaiveDate;
use core_kernel::{BillingPeriod, Money, RoomId, TenantId};
use rust_decimal_macros::dec;

use domain_billing::{AmountOverrides, BillingError, Invoice, InvoiceStatus, UtilityCharge};

fn test_invoice() -> Invoice {
    Invoice::new(
        RoomId::new(),
        TenantId::new(),
        Money::thb(dec!(3500)),
        UtilityCharge {
            units: 10,
            amount: Money::thb(dec!(180)),
        },
        UtilityCharge {
            units: 60,
            amount: Money::thb(dec!(480)),
        },
        BillingPeriod::new(2024, 6).unwrap(),
        NaiveDate::from_ymd_opt(2024, 6, 8).unwrap(),
    )
}

mod totals {
    use super::*;

    #[test]
    fn test_total_is_sum_of_line_amounts() {
        let invoice = test_invoice();
        // rent 3500 + water 180 + electric 480
        assert_eq!(invoice.total_amount.amount(), dec!(4160));
    }

    #[test]
    fn test_new_invoice_is_pending() {
        let invoice = test_invoice();
        assert_eq!(invoice.status, InvoiceStatus::Pending);
        assert!(invoice.paid_at.is_none());
        assert!(invoice.proof_image.is_none());
    }

    #[test]
    fn test_override_recomputes_total() {
        let mut invoice = test_invoice();
        invoice.apply_overrides(AmountOverrides {
            water_amount: Some(Money::thb(dec!(200))),
            ..Default::default()
        });
        assert_eq!(invoice.water_amount.amount(), dec!(200));
        assert_eq!(invoice.total_amount.amount(), dec!(4180));
    }

    #[test]
    fn test_units_and_amounts_override_independently() {
        let mut invoice = test_invoice();
        invoice.apply_overrides(AmountOverrides {
            electric_units: Some(75),
            ..Default::default()
        });
        // Units changed, amount untouched, total unchanged
        assert_eq!(invoice.electric_units, 75);
        assert_eq!(invoice.electric_amount.amount(), dec!(480));
        assert_eq!(invoice.total_amount.amount(), dec!(4160));
    }

    #[test]
    fn test_override_due_date() {
        let mut invoice = test_invoice();
        let new_due = NaiveDate::from_ymd_opt(2024, 6, 20).unwrap();
        invoice.apply_overrides(AmountOverrides {
            due_date: Some(new_due),
            ..Default::default()
        });
        assert_eq!(invoice.due_date, new_due);
    }

    #[test]
    fn test_total_invariant_holds_after_every_override() {
        let mut invoice = test_invoice();
        invoice.apply_overrides(AmountOverrides {
            rent_amount: Some(Money::thb(dec!(4000))),
            water_amount: Some(Money::thb(dec!(90))),
            electric_amount: Some(Money::thb(dec!(400))),
            ..Default::default()
        });
        assert_eq!(
            invoice.total_amount,
            invoice.rent_amount + invoice.water_amount + invoice.electric_amount
        );
    }
}

mod serialization {
    use super::*;

    /// Status values serialize to the wire form the surrounding
    /// application stores (PENDING, VERIFYING, ...).
    #[test]
    fn test_status_wire_format() {
        assert_eq!(
            serde_json::to_value(InvoiceStatus::Pending).unwrap(),
            "PENDING"
        );
        assert_eq!(
            serde_json::to_value(InvoiceStatus::Verifying).unwrap(),
            "VERIFYING"
        );
        assert_eq!(
            serde_json::to_value(InvoiceStatus::Overdue).unwrap(),
            "OVERDUE"
        );
    }

    #[test]
    fn test_invoice_roundtrip() {
        let invoice = test_invoice();
        let json = serde_json::to_string(&invoice).unwrap();
        let back: Invoice = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, invoice.id);
        assert_eq!(back.total_amount, invoice.total_amount);
        assert_eq!(back.status, invoice.status);
    }
}

mod lifecycle {
    use super::*;

    #[test]
    fn test_submit_proof_moves_to_verifying() {
        let mut invoice = test_invoice();
        invoice.submit_proof("slip.jpg").unwrap();
        assert_eq!(invoice.status, InvoiceStatus::Verifying);
        assert_eq!(invoice.proof_image.as_deref(), Some("slip.jpg"));
    }

    #[test]
    fn test_empty_proof_is_rejected() {
        let mut invoice = test_invoice();
        let result = invoice.submit_proof("   ");
        assert!(matches!(result, Err(BillingError::InvalidProof)));
        assert_eq!(invoice.status, InvoiceStatus::Pending);
    }

    #[test]
    fn test_approve_sets_paid_at() {
        let mut invoice = test_invoice();
        invoice.submit_proof("slip.jpg").unwrap();
        invoice.approve().unwrap();
        assert_eq!(invoice.status, InvoiceStatus::Paid);
        assert!(invoice.paid_at.is_some());
    }

    #[test]
    fn test_reject_retains_proof_for_audit() {
        let mut invoice = test_invoice();
        invoice.submit_proof("slip.jpg").unwrap();
        invoice.reject().unwrap();
        assert_eq!(invoice.status, InvoiceStatus::Rejected);
        assert_eq!(invoice.proof_image.as_deref(), Some("slip.jpg"));
        assert!(invoice.paid_at.is_none());
    }

    #[test]
    fn test_resubmission_after_rejection() {
        let mut invoice = test_invoice();
        invoice.submit_proof("first.jpg").unwrap();
        invoice.reject().unwrap();

        // Same invoice returns to verifying with the replacement image
        invoice.submit_proof("second.jpg").unwrap();
        assert_eq!(invoice.status, InvoiceStatus::Verifying);
        assert_eq!(invoice.proof_image.as_deref(), Some("second.jpg"));
    }

    #[test]
    fn test_overdue_invoice_accepts_proof() {
        let mut invoice = test_invoice();
        invoice.fall_overdue().unwrap();
        invoice.submit_proof("late.jpg").unwrap();
        assert_eq!(invoice.status, InvoiceStatus::Verifying);
    }

    #[test]
    fn test_manual_payment_from_pending() {
        let mut invoice = test_invoice();
        invoice.record_manual_payment().unwrap();
        assert_eq!(invoice.status, InvoiceStatus::Paid);
        assert!(invoice.paid_at.is_some());
    }

    #[test]
    fn test_manual_payment_from_overdue() {
        let mut invoice = test_invoice();
        invoice.fall_overdue().unwrap();
        assert!(invoice.record_manual_payment().is_ok());
    }

    #[test]
    fn test_manual_payment_bypasses_verification() {
        let mut invoice = test_invoice();
        invoice.submit_proof("slip.jpg").unwrap();
        assert!(invoice.record_manual_payment().is_ok());
        assert_eq!(invoice.status, InvoiceStatus::Paid);
    }

    #[test]
    fn test_approve_requires_verifying() {
        let mut invoice = test_invoice();
        let result = invoice.approve();
        assert!(matches!(
            result,
            Err(BillingError::InvalidTransition {
                from: InvoiceStatus::Pending,
                ..
            })
        ));
    }

    #[test]
    fn test_reject_requires_verifying() {
        let mut invoice = test_invoice();
        invoice.fall_overdue().unwrap();
        assert!(invoice.reject().is_err());
    }

    #[test]
    fn test_paid_invoice_accepts_nothing_further() {
        let mut invoice = test_invoice();
        invoice.record_manual_payment().unwrap();

        assert!(invoice.submit_proof("slip.jpg").is_err());
        assert!(invoice.approve().is_err());
        assert!(invoice.reject().is_err());
        assert!(invoice.record_manual_payment().is_err());
        assert!(invoice.fall_overdue().is_err());
    }

    #[test]
    fn test_only_pending_falls_overdue() {
        let mut invoice = test_invoice();
        invoice.submit_proof("slip.jpg").unwrap();
        let result = invoice.fall_overdue();
        assert!(matches!(
            result,
            Err(BillingError::InvalidTransition {
                from: InvoiceStatus::Verifying,
                ..
            })
        ));
    }
}
