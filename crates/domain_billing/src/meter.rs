//! Meter readings and the append-only reading ledger

use std::sync::Arc;

use chrono::{DateTime, Utc};
use core_kernel::{MeterReadingId, RoomId};
use serde::{Deserialize, Serialize};

use crate::error::BillingError;
use crate::ports::MeterReadingStore;

/// A periodic snapshot of a room's cumulative utility meters
///
/// The `*_previous` fields are captured at creation time from the room's
/// then-latest reading (0 if none exists) and are never recomputed later.
/// Readings are immutable once stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeterReading {
    /// Unique identifier
    pub id: MeterReadingId,
    /// Room the meters belong to
    pub room_id: RoomId,
    /// Water counter at the previous reading
    pub water_previous: i64,
    /// Water counter now
    pub water_current: i64,
    /// Electricity counter at the previous reading
    pub electric_previous: i64,
    /// Electricity counter now
    pub electric_current: i64,
    /// When the reading was taken
    pub reading_date: DateTime<Utc>,
}

impl MeterReading {
    /// Water consumed since the previous reading, reset-protected
    ///
    /// A current value below the previous one means the physical meter was
    /// replaced and restarted; the raw current reading then stands in for
    /// the period's consumption.
    pub fn water_units(&self) -> i64 {
        reset_protected_delta(self.water_previous, self.water_current)
    }

    /// Electricity consumed since the previous reading, reset-protected
    pub fn electric_units(&self) -> i64 {
        reset_protected_delta(self.electric_previous, self.electric_current)
    }
}

fn reset_protected_delta(previous: i64, current: i64) -> i64 {
    if current < previous {
        current
    } else {
        current - previous
    }
}

/// Append-only ledger of meter readings per room
///
/// Recording looks up the room's latest reading to populate the previous
/// fields. No validation that `current >= previous` is performed here;
/// reset handling happens in the consumption math.
#[derive(Clone)]
pub struct MeterReadingLedger {
    store: Arc<dyn MeterReadingStore>,
}

impl MeterReadingLedger {
    /// Creates a ledger over the given store
    pub fn new(store: Arc<dyn MeterReadingStore>) -> Self {
        Self { store }
    }

    /// Records a new reading for a room
    pub async fn record(
        &self,
        room_id: RoomId,
        water_current: i64,
        electric_current: i64,
    ) -> Result<MeterReading, BillingError> {
        let last = self.store.latest_for(room_id).await?;

        let (water_previous, electric_previous) = match &last {
            Some(prev) => (prev.water_current, prev.electric_current),
            None => (0, 0),
        };

        let reading = MeterReading {
            id: MeterReadingId::new_v7(),
            room_id,
            water_previous,
            water_current,
            electric_previous,
            electric_current,
            reading_date: Utc::now(),
        };

        self.store.insert(&reading).await?;
        tracing::debug!(%room_id, water_current, electric_current, "meter reading recorded");
        Ok(reading)
    }

    /// Returns the most recent reading for a room
    pub async fn latest_for(&self, room_id: RoomId) -> Result<Option<MeterReading>, BillingError> {
        Ok(self.store.latest_for(room_id).await?)
    }

    /// Returns up to `limit` readings, most recent first
    pub async fn history_for(
        &self,
        room_id: RoomId,
        limit: usize,
    ) -> Result<Vec<MeterReading>, BillingError> {
        Ok(self.store.history_for(room_id, limit).await?)
    }
}


#[cfg(test)]
mod proptests {
    use super::reset_protected_delta;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn consumption_is_never_negative(
            previous in 0i64..1_000_000i64,
            current in 0i64..1_000_000i64
        ) {
            prop_assert!(reset_protected_delta(previous, current) >= 0);
        }

        #[test]
        fn monotone_meters_bill_the_delta(
            previous in 0i64..1_000_000i64,
            delta in 0i64..1_000_000i64
        ) {
            prop_assert_eq!(reset_protected_delta(previous, previous + delta), delta);
        }
    }
}
