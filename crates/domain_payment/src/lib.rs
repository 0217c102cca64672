//! Payment Domain - PromptPay Payload Encoding
//!
//! This crate produces the scannable payment code shown on invoices: a
//! deterministic, pure-function encoding of a payee identifier and an
//! optional amount into the nested Tag-Length-Value format used by Thai
//! PromptPay QR codes, finished with a CRC-CCITT checksum.
//!
//! No I/O, no randomness, no error path: identical inputs always produce
//! byte-identical payloads, and unrecognized payee-id shapes pass through
//! unchanged rather than being rejected.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_payment::encode;
//! use rust_decimal_macros::dec;
//!
//! // Static code: the payer keys in the amount themselves
//! let static_code = encode("081-234-5678", None);
//!
//! // Dynamic code: amount baked into the payload
//! let dynamic_code = encode("0812345678", Some(dec!(4160)));
//! ```

pub mod crc;
pub mod promptpay;

pub use crc::{checksum_hex, crc16_ccitt};
pub use promptpay::{encode, normalize_payee_id};
