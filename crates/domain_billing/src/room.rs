//! External read models: rooms and rate settings
//!
//! Room and tenant management live outside this core; the billing engine
//! only reads these records through the `RoomDirectory` and `RateProvider`
//! ports.

use core_kernel::{Money, RoomId, TenantId, UtilityRate};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Occupancy status of a room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoomStatus {
    Vacant,
    Occupied,
    Maintenance,
}

/// A dormitory room as seen by the billing engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    /// Unique identifier
    pub id: RoomId,
    /// Human-readable room number (e.g. "201")
    pub room_number: String,
    /// Monthly base rent
    pub base_rent: Money,
    /// Assigned tenant, if any
    pub tenant_id: Option<TenantId>,
    /// Occupancy status
    pub status: RoomStatus,
}

impl Room {
    /// Returns true if the room is occupied
    pub fn is_occupied(&self) -> bool {
        self.status == RoomStatus::Occupied
    }
}

/// Dormitory-wide billing settings
///
/// Read fresh at invoice-generation time; no rate history is kept, so a rate
/// change applies to every invoice generated after it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateSettings {
    /// Display name of the dormitory
    pub dorm_name: String,
    /// Price per unit of water
    pub water_rate: UtilityRate,
    /// Price per unit of electricity
    pub electric_rate: UtilityRate,
    /// PromptPay payee id used on payment QR codes, if configured
    pub promptpay_id: Option<String>,
}

impl Default for RateSettings {
    fn default() -> Self {
        Self {
            dorm_name: "หอพักของฉัน".to_string(),
            water_rate: UtilityRate::thb_per_unit(dec!(18)),
            electric_rate: UtilityRate::thb_per_unit(dec!(8)),
            promptpay_id: None,
        }
    }
}
