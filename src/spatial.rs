//! Rectangles for rooms and placed items, plus room lookup.
//!
//! Item rectangles come in two frames: room-local, which every placement
//! rule uses, and floor-plan global, which is only needed for drawing and
//! pointer hit-testing.

use crate::catalog::definition_of;
use crate::geometry::{size_under_rotation, Rect, Size};
use crate::types::{FloorPlan, PlacedItem, Room};

/// Room rectangle in the global frame.
pub fn room_rect(room: &Room) -> Rect {
    Rect::new(room.x_cm, room.y_cm, room_size(room))
}

/// Room rectangle in its own local frame, anchored at (0, 0).
pub fn room_local_rect(room: &Room) -> Rect {
    Rect::new(0.0, 0.0, room_size(room))
}

fn room_size(room: &Room) -> Size {
    Size {
        width_cm: room.width_cm,
        depth_cm: room.depth_cm,
    }
}

/// Rotated footprint of an item; `None` if its kind is not in the catalog.
pub fn item_size(item: &PlacedItem) -> Option<Size> {
    let def = definition_of(item.kind)?;
    Some(size_under_rotation(def.footprint(), item.rotation))
}

pub fn item_local_rect(item: &PlacedItem) -> Option<Rect> {
    item_size(item).map(|size| Rect::new(item.x, item.y, size))
}

pub fn item_global_rect(item: &PlacedItem, room: &Room) -> Option<Rect> {
    item_local_rect(item).map(|r| r.translate(room.x_cm, room.y_cm))
}

pub fn room_of<'a>(floor_plan: &'a FloorPlan, room_id: &str) -> Option<&'a Room> {
    floor_plan.rooms.iter().find(|r| r.id == room_id)
}
