//! In-memory meter reading store
//!
//! Readings append per room in arrival order; history queries return fresh
//! snapshots, most recent first.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use core_kernel::{DomainPort, PortError, RoomId};
use domain_billing::{MeterReading, MeterReadingStore};

/// Append-only meter reading storage backed by in-process hash maps
#[derive(Default)]
pub struct InMemoryMeterReadingStore {
    readings: RwLock<HashMap<RoomId, Vec<MeterReading>>>,
}

impl InMemoryMeterReadingStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DomainPort for InMemoryMeterReadingStore {}

#[async_trait]
impl MeterReadingStore for InMemoryMeterReadingStore {
    async fn insert(&self, reading: &MeterReading) -> Result<(), PortError> {
        let mut readings = self
            .readings
            .write()
            .map_err(|_| PortError::internal("meter store lock poisoned"))?;
        readings
            .entry(reading.room_id)
            .or_default()
            .push(reading.clone());
        Ok(())
    }

    async fn latest_for(&self, room_id: RoomId) -> Result<Option<MeterReading>, PortError> {
        let readings = self
            .readings
            .read()
            .map_err(|_| PortError::internal("meter store lock poisoned"))?;
        Ok(readings
            .get(&room_id)
            .and_then(|history| history.last())
            .cloned())
    }

    async fn history_for(
        &self,
        room_id: RoomId,
        limit: usize,
    ) -> Result<Vec<MeterReading>, PortError> {
        let readings = self
            .readings
            .read()
            .map_err(|_| PortError::internal("meter store lock poisoned"))?;
        Ok(readings
            .get(&room_id)
            .map(|history| history.iter().rev().take(limit).cloned().collect())
            .unwrap_or_default())
    }
}
