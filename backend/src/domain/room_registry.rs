//! Static registry of bookable consulting rooms.
//!
//! The clinic has a fixed set of five rooms defined at startup. Nothing mutates
//! the registry at runtime; the booking flow only reads it to reject gestures
//! that reference a room that does not exist.

use std::sync::Arc;

use super::models::Room;

/// Number of rooms registered at startup
pub const ROOM_COUNT: u32 = 5;

#[derive(Debug, Clone)]
pub struct RoomRegistry {
    rooms: Arc<Vec<Room>>,
}

impl RoomRegistry {
    /// Build a registry from an explicit room list
    pub fn new(rooms: Vec<Room>) -> Self {
        Self {
            rooms: Arc::new(rooms),
        }
    }

    /// All rooms ordered by id
    pub fn all(&self) -> &[Room] {
        &self.rooms
    }

    pub fn get(&self, room_id: u32) -> Option<&Room> {
        self.rooms.iter().find(|room| room.id == room_id)
    }

    pub fn contains(&self, room_id: u32) -> bool {
        self.get(room_id).is_some()
    }

    /// Display title of a room, falling back to the bare id for unknown rooms
    pub fn title_for(&self, room_id: u32) -> String {
        self.get(room_id)
            .map(|room| room.title.clone())
            .unwrap_or_else(|| format!("Room {}", room_id))
    }
}

impl Default for RoomRegistry {
    fn default() -> Self {
        Self::new(
            (1..=ROOM_COUNT)
                .map(|id| Room::new(id, format!("Consulting Room {}", id)))
                .collect(),
        )
    }
}
