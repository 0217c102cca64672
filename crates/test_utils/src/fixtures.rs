//! Pre-built Test Fixtures
//!
//! Ready-to-use test data for common entities across the billing system.
//! Fixtures are consistent and predictable for unit tests.

use chrono::NaiveDate;
use core_kernel::{BillingPeriod, Money, UtilityRate};
use rust_decimal_macros::dec;

use domain_billing::RateSettings;

/// Fixture for Money test data
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// Typical monthly base rent
    pub fn base_rent() -> Money {
        Money::thb(dec!(3500))
    }

    /// A small THB amount
    pub fn thb_100() -> Money {
        Money::thb(dec!(100.00))
    }

    /// Zero baht
    pub fn thb_zero() -> Money {
        Money::thb(dec!(0))
    }
}

/// Fixture for rate test data
pub struct RateFixtures;

impl RateFixtures {
    /// The default water tariff (18 baht per unit)
    pub fn water() -> UtilityRate {
        UtilityRate::thb_per_unit(dec!(18))
    }

    /// The default electricity tariff (8 baht per unit)
    pub fn electric() -> UtilityRate {
        UtilityRate::thb_per_unit(dec!(8))
    }

    /// Rate settings with a configured PromptPay payee
    pub fn settings_with_promptpay() -> RateSettings {
        RateSettings {
            promptpay_id: Some("0812345678".to_string()),
            ..RateSettings::default()
        }
    }
}

/// Fixture for temporal test data
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// A fixed billing period (June 2024)
    pub fn period() -> BillingPeriod {
        BillingPeriod::new(2024, 6).expect("valid fixture period")
    }

    /// The period after [`Self::period`]
    pub fn next_period() -> BillingPeriod {
        Self::period().next()
    }

    /// A date inside the fixture period
    pub fn mid_period_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).expect("valid fixture date")
    }
}
