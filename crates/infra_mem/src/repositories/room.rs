//! In-memory room directory

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use core_kernel::{DomainPort, PortError, RoomId};
use domain_billing::{Room, RoomDirectory};

/// Room records backed by an in-process hash map
#[derive(Default)]
pub struct InMemoryRoomDirectory {
    rooms: RwLock<HashMap<RoomId, Room>>,
}

impl InMemoryRoomDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a room record
    pub fn put(&self, room: Room) {
        if let Ok(mut rooms) = self.rooms.write() {
            rooms.insert(room.id, room);
        }
    }
}

impl DomainPort for InMemoryRoomDirectory {}

#[async_trait]
impl RoomDirectory for InMemoryRoomDirectory {
    async fn get(&self, id: RoomId) -> Result<Option<Room>, PortError> {
        let rooms = self
            .rooms
            .read()
            .map_err(|_| PortError::internal("room directory lock poisoned"))?;
        Ok(rooms.get(&id).cloned())
    }

    async fn occupied_rooms(&self) -> Result<Vec<Room>, PortError> {
        let rooms = self
            .rooms
            .read()
            .map_err(|_| PortError::internal("room directory lock poisoned"))?;

        let mut occupied: Vec<Room> = rooms.values().filter(|r| r.is_occupied()).cloned().collect();
        // Deterministic batch order
        occupied.sort_by(|a, b| a.room_number.cmp(&b.room_number));
        Ok(occupied)
    }
}
