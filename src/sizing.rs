//! Room dimensions from a floor area in tsubo, and floor plan editing.
//!
//! A room of a given area is laid out as a 1.5:1 rectangle with both sides
//! rounded to the nearest 10 cm, so the resulting area is approximate.

use crate::geometry::{snap_to_grid, Size};
use crate::types::{FloorPlan, Room, RoomType};

const CM2_PER_TSUBO: f64 = 1.62 * 10_000.0;
const ASPECT_RATIO: f64 = 1.5;
const ROUND_TO_CM: f64 = 10.0;

/// Horizontal spacing between rooms appended to a plan.
pub const ROOM_SPACING_CM: f64 = 50.0;

pub fn room_dimensions(tsubo: f64) -> Size {
    let area_cm2 = tsubo * CM2_PER_TSUBO;
    let width_cm = snap_to_grid((area_cm2 / ASPECT_RATIO).sqrt(), ROUND_TO_CM);
    let depth_cm = snap_to_grid(area_cm2 / width_cm, ROUND_TO_CM);
    Size { width_cm, depth_cm }
}

fn sized_room(id: &str, name: &str, room_type: RoomType, tsubo: f64, x_cm: f64) -> Room {
    let size = room_dimensions(tsubo);
    Room {
        id: id.to_owned(),
        name: name.to_owned(),
        room_type,
        tsubo: Some(tsubo),
        width_cm: size.width_cm,
        depth_cm: size.depth_cm,
        x_cm,
        y_cm: 0.0,
    }
}

/// A living/dining/kitchen space with a western-style bedroom directly to
/// its right.
pub fn two_room_layout(ldk_tsubo: f64, western_tsubo: f64) -> FloorPlan {
    let ldk = sized_room("ldk", "LDK", RoomType::LivingRoom, ldk_tsubo, 0.0);
    let western = sized_room(
        "western",
        "Western room",
        RoomType::Bedroom,
        western_tsubo,
        ldk.width_cm,
    );
    FloorPlan {
        name: "LDK + western room".into(),
        rooms: vec![ldk, western],
    }
}

impl FloorPlan {
    /// Size a room from its area and place it to the right of the last one.
    pub fn append_room(&mut self, id: &str, name: &str, room_type: RoomType, tsubo: f64) -> &Room {
        let x_cm = self
            .rooms
            .last()
            .map_or(0.0, |last| last.x_cm + last.width_cm + ROOM_SPACING_CM);
        self.rooms.push(sized_room(id, name, room_type, tsubo, x_cm));
        &self.rooms[self.rooms.len() - 1]
    }

    pub fn remove_room(&mut self, id: &str) -> Option<Room> {
        let index = self.rooms.iter().position(|r| r.id == id)?;
        Some(self.rooms.remove(index))
    }

    /// Move a room; negative coordinates clamp to 0.
    pub fn reposition_room(&mut self, id: &str, x_cm: f64, y_cm: f64) -> bool {
        match self.rooms.iter_mut().find(|r| r.id == id) {
            Some(room) => {
                room.x_cm = x_cm.max(0.0);
                room.y_cm = y_cm.max(0.0);
                true
            }
            None => false,
        }
    }
}
