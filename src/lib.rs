//! Floor plan furnishing engine.
//!
//! Rooms are laid out on a floor plan and catalog items are placed inside
//! them. Every add, move, rotate or drag produces a candidate that is run
//! through a fixed rule pipeline (containment, overlap, appliance support,
//! passage clearance) and committed only if it passes.

pub mod catalog;
pub mod drag;
pub mod error;
pub mod geometry;
pub mod mutation;
pub mod sizing;
pub mod spatial;
pub mod support;
pub mod types;
pub mod validation;

pub use error::{Rejection, RotationError};
pub use geometry::{rect_contains, rect_gap, rect_overlap, size_under_rotation, Rect, Size};
pub use support::{is_floating, is_supported};
pub use types::{
    FloorPlan, ItemCategory, ItemDefinition, ItemKind, Layout, PlacedItem, PlacementRules, Room,
    RoomType, Rotation,
};
pub use validation::{can_place, check_placement};
