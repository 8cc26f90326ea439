//! Turning pointer drags on the floor plan into candidate positions.
//!
//! Pointer coordinates are in the global frame. A drag keeps the offset
//! between the pointer and the item's top-left corner, so the item does
//! not jump under the cursor, and the resulting local position is snapped
//! to the grid before it reaches the validator.

use crate::error::Rejection;
use crate::geometry::{snap_to_grid, Size};
use crate::mutation::{move_item, StepUndo};
use crate::spatial::{room_of, room_rect};
use crate::types::{FloorPlan, Layout, PlacedItem, PlacementRules, Room};

/// First room whose rectangle contains the point, edges included.
pub fn room_at(floor_plan: &FloorPlan, x: f64, y: f64) -> Option<&Room> {
    floor_plan
        .rooms
        .iter()
        .find(|room| room_rect(room).contains_point(x, y))
}

/// Furthest right and bottom edge of any room; 100x100 for an empty plan.
pub fn plan_extent(floor_plan: &FloorPlan) -> Size {
    if floor_plan.rooms.is_empty() {
        return Size {
            width_cm: 100.0,
            depth_cm: 100.0,
        };
    }
    floor_plan.rooms.iter().fold(Size::default(), |acc, room| {
        let r = room_rect(room);
        Size {
            width_cm: acc.width_cm.max(r.right),
            depth_cm: acc.depth_cm.max(r.bottom),
        }
    })
}

/// Where a drag would drop its item.
#[derive(Debug, Clone, PartialEq)]
pub struct DragTarget<'a> {
    pub room: &'a Room,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    pub item_id: String,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl DragSession {
    /// Start dragging `item` from a pointer at global `(x, y)`.
    pub fn begin(floor_plan: &FloorPlan, item: &PlacedItem, x: f64, y: f64) -> Option<Self> {
        let room = room_of(floor_plan, &item.room_id)?;
        Some(DragSession {
            item_id: item.id.clone(),
            offset_x: x - (room.x_cm + item.x),
            offset_y: y - (room.y_cm + item.y),
        })
    }

    /// Room under the pointer and the snapped room-local drop position.
    pub fn target<'a>(
        &self,
        floor_plan: &'a FloorPlan,
        x: f64,
        y: f64,
        grid_size_cm: f64,
    ) -> Option<DragTarget<'a>> {
        let room = room_at(floor_plan, x, y)?;
        Some(DragTarget {
            room,
            x: snap_to_grid(x - room.x_cm - self.offset_x, grid_size_cm),
            y: snap_to_grid(y - room.y_cm - self.offset_y, grid_size_cm),
        })
    }

    /// Move the dragged item to follow a pointer at global `(x, y)`.
    pub fn drag_to(
        &self,
        layout: &mut Layout,
        x: f64,
        y: f64,
        rules: &PlacementRules,
    ) -> Result<StepUndo, Rejection> {
        let (room_id, local_x, local_y) = {
            let target = self
                .target(&layout.floor_plan, x, y, rules.grid_size_cm)
                .ok_or(Rejection::OutsideFloorPlan)?;
            (target.room.id.clone(), target.x, target.y)
        };
        move_item(layout, &self.item_id, &room_id, local_x, local_y, rules)
    }
}
