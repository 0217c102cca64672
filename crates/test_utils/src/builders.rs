//! Test Data Builders
//!
//! Builder patterns for constructing test data with sensible defaults,
//! letting tests specify only the fields they care about.

use chrono::Utc;
use core_kernel::{MeterReadingId, Money, RoomId, TenantId};

use domain_billing::{MeterReading, Room, RoomStatus};

use crate::fixtures::MoneyFixtures;

/// Builder for room records
pub struct TestRoomBuilder {
    id: RoomId,
    room_number: String,
    base_rent: Money,
    tenant_id: Option<TenantId>,
    status: RoomStatus,
}

impl Default for TestRoomBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestRoomBuilder {
    /// Creates a builder for an occupied room with a tenant and default rent
    pub fn new() -> Self {
        Self {
            id: RoomId::new(),
            room_number: "101".to_string(),
            base_rent: MoneyFixtures::base_rent(),
            tenant_id: Some(TenantId::new()),
            status: RoomStatus::Occupied,
        }
    }

    pub fn with_id(mut self, id: RoomId) -> Self {
        self.id = id;
        self
    }

    pub fn with_room_number(mut self, number: impl Into<String>) -> Self {
        self.room_number = number.into();
        self
    }

    pub fn with_base_rent(mut self, rent: Money) -> Self {
        self.base_rent = rent;
        self
    }

    pub fn with_tenant(mut self, tenant_id: TenantId) -> Self {
        self.tenant_id = Some(tenant_id);
        self
    }

    /// Removes the tenant (the room stays in its current status)
    pub fn without_tenant(mut self) -> Self {
        self.tenant_id = None;
        self
    }

    pub fn with_status(mut self, status: RoomStatus) -> Self {
        self.status = status;
        self
    }

    pub fn vacant(mut self) -> Self {
        self.status = RoomStatus::Vacant;
        self.tenant_id = None;
        self
    }

    pub fn build(self) -> Room {
        Room {
            id: self.id,
            room_number: self.room_number,
            base_rent: self.base_rent,
            tenant_id: self.tenant_id,
            status: self.status,
        }
    }
}

/// Builder for meter readings
pub struct TestMeterReadingBuilder {
    room_id: RoomId,
    water_previous: i64,
    water_current: i64,
    electric_previous: i64,
    electric_current: i64,
}

impl Default for TestMeterReadingBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestMeterReadingBuilder {
    /// Creates a builder with 10 water units and 60 electric units consumed
    pub fn new() -> Self {
        Self {
            room_id: RoomId::new(),
            water_previous: 100,
            water_current: 110,
            electric_previous: 2000,
            electric_current: 2060,
        }
    }

    pub fn for_room(mut self, room_id: RoomId) -> Self {
        self.room_id = room_id;
        self
    }

    pub fn with_water(mut self, previous: i64, current: i64) -> Self {
        self.water_previous = previous;
        self.water_current = current;
        self
    }

    pub fn with_electric(mut self, previous: i64, current: i64) -> Self {
        self.electric_previous = previous;
        self.electric_current = current;
        self
    }

    pub fn build(self) -> MeterReading {
        MeterReading {
            id: MeterReadingId::new_v7(),
            room_id: self.room_id,
            water_previous: self.water_previous,
            water_current: self.water_current,
            electric_previous: self.electric_previous,
            electric_current: self.electric_current,
            reading_date: Utc::now(),
        }
    }
}
