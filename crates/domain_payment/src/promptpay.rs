//! PromptPay payment payload assembly
//!
//! Serializes a payee identifier and optional amount into the nested TLV
//! text format scanned by Thai banking apps. Field tags and constants follow
//! the Bank of Thailand PromptPay QR specification (EMVCo merchant-presented
//! layout).

use core_kernel::Currency;
use rust_decimal::Decimal;

use crate::crc::checksum_hex;

// Top-level field tags
const TAG_PAYLOAD_FORMAT: &str = "00";
const TAG_INITIATION_METHOD: &str = "01";
const TAG_MERCHANT_INFO: &str = "29";
const TAG_CURRENCY: &str = "53";
const TAG_AMOUNT: &str = "54";
const TAG_COUNTRY: &str = "58";
const TAG_CRC: &str = "63";

// Sub-fields of the merchant account information block
const SUB_TAG_AID: &str = "00";
const SUB_TAG_PAYEE_ID: &str = "01";

const PAYLOAD_FORMAT: &str = "01";
/// Payer keys in the amount themselves
const INITIATION_STATIC: &str = "11";
/// Amount is baked into the payload
const INITIATION_DYNAMIC: &str = "12";
/// Application identifier for PromptPay credit transfer
const PROMPTPAY_AID: &str = "A000000677010111";
const COUNTRY_CODE: &str = "TH";
/// International dialing prefix replacing a leading 0 on phone numbers
const THAI_CALLING_CODE: &str = "0066";

/// Placeholder length declared for the CRC field before it is computed
const CRC_PLACEHOLDER: &str = "6304";

/// Wraps a value as tag + zero-padded 2-digit length + value
fn tlv(tag: &str, value: &str) -> String {
    format!("{}{:02}{}", tag, value.len(), value)
}

/// Normalizes a payee identifier for embedding in the payload
///
/// Separator characters (dashes, spaces) are stripped. A 10-digit string
/// starting with `0` is a domestic phone number and is rewritten to
/// international form; a 13-digit string is a national id and passes
/// through. Anything else passes through unchanged - best effort, never an
/// error.
pub fn normalize_payee_id(payee_id: &str) -> String {
    let cleaned: String = payee_id
        .chars()
        .filter(|c| *c != '-' && !c.is_whitespace())
        .collect();

    if cleaned.len() == 10 && cleaned.starts_with('0') && cleaned.chars().all(|c| c.is_ascii_digit())
    {
        format!("{}{}", THAI_CALLING_CODE, &cleaned[1..])
    } else {
        cleaned
    }
}

/// Encodes a payee identifier and optional amount into a payment payload
///
/// Pure and deterministic: identical inputs always produce byte-identical
/// output. An absent or non-positive amount yields a static code without an
/// amount field; a positive amount yields a dynamic code carrying the amount
/// with exactly two decimal digits.
pub fn encode(payee_id: &str, amount: Option<Decimal>) -> String {
    let payee = normalize_payee_id(payee_id);
    let amount = amount.filter(|a| a.is_sign_positive() && !a.is_zero());

    let initiation = if amount.is_some() {
        INITIATION_DYNAMIC
    } else {
        INITIATION_STATIC
    };

    let merchant_info = format!(
        "{}{}",
        tlv(SUB_TAG_AID, PROMPTPAY_AID),
        tlv(SUB_TAG_PAYEE_ID, &payee)
    );

    let mut payload = String::new();
    payload.push_str(&tlv(TAG_PAYLOAD_FORMAT, PAYLOAD_FORMAT));
    payload.push_str(&tlv(TAG_INITIATION_METHOD, initiation));
    payload.push_str(&tlv(TAG_MERCHANT_INFO, &merchant_info));
    payload.push_str(&tlv(TAG_CURRENCY, Currency::THB.numeric_code()));
    if let Some(amount) = amount {
        payload.push_str(&tlv(TAG_AMOUNT, &format!("{:.2}", amount)));
    }
    payload.push_str(&tlv(TAG_COUNTRY, COUNTRY_CODE));

    // The CRC covers everything up to and including its own tag and length
    payload.push_str(CRC_PLACEHOLDER);
    let crc = checksum_hex(&payload);
    payload.push_str(&crc);

    payload
}
