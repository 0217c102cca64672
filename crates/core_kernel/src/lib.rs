//! Core Kernel - Foundational types and utilities for the dormitory billing system
//!
//! This crate provides the fundamental building blocks used across all domain modules:
//! - Money types with precise decimal arithmetic
//! - Temporal types for billing-period and timezone handling
//! - Common identifiers and value objects
//! - Port infrastructure for the hexagonal architecture

pub mod money;
pub mod temporal;
pub mod identifiers;
pub mod ports;

pub use money::{Money, Currency, MoneyError, UtilityRate};
pub use temporal::{BillingPeriod, Timezone, TemporalError};
pub use identifiers::{RoomId, TenantId, InvoiceId, MeterReadingId};
pub use ports::{DomainPort, PortError};
