//! CRC-CCITT checksum
//!
//! The 16-bit CRC required by the payment payload format: polynomial
//! `0x1021`, initial register `0xFFFF`, no final XOR, processed one byte at
//! a time most-significant-bit first.

const POLYNOMIAL: u16 = 0x1021;
const INITIAL: u16 = 0xFFFF;

/// Computes the CRC-CCITT checksum over the input's bytes
pub fn crc16_ccitt(input: &str) -> u16 {
    let mut crc = INITIAL;
    for byte in input.bytes() {
        crc ^= (byte as u16) << 8;
        for _ in 0..8 {
            if crc & 0x8000 != 0 {
                crc = (crc << 1) ^ POLYNOMIAL;
            } else {
                crc <<= 1;
            }
        }
    }
    crc
}

/// Formats the checksum as 4 uppercase hexadecimal digits
pub fn checksum_hex(input: &str) -> String {
    format!("{:04X}", crc16_ccitt(input))
}
